//! The shipped component library documentation.
//!
//! Records are grouped by category and registered in the order the
//! documentation site lists them. That order is the catalog order.

use crate::catalog::{Catalog, Category, ComponentRecord, ExampleDescriptor, PropDescriptor};
use crate::error::CatalogError;

/// Builds the shipped catalog.
///
/// # Errors
///
/// Returns an error if the table below contains a duplicate id.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(records())
}

/// Returns the shipped records in catalog order.
#[must_use]
pub fn records() -> Vec<ComponentRecord> {
    vec![
        // Form inputs
        button(),
        text_input(),
        checkbox(),
        switch(),
        select(),
        radio_group(),
        radio(),

        // Layout
        stack(),
        card(),
        card_header(),
        grid(),
        divider(),

        // Data display
        table(),
        table_row(),
        table_cell(),
        list(),
        badge(),
        avatar(),

        // Feedback
        alert(),
        toast(),
        spinner(),
        modal(),

        // Navigation
        tabs(),
        tab(),
        breadcrumb(),
    ]
}

fn style_prop() -> PropDescriptor {
    PropDescriptor::optional(
        "style",
        "StyleProp<ViewStyle>",
        "Extra styles merged after the component's own styles.",
    )
}

fn test_id_prop() -> PropDescriptor {
    PropDescriptor::optional("testID", "string", "Identifier for end-to-end tests.")
}

// ==================== Form inputs ====================

fn button() -> ComponentRecord {
    ComponentRecord::new(
        "button",
        "Button",
        Category::FormInputs,
        "A pressable control that triggers an action. Wraps Pressable with themed variants and sizes.",
    )
    .prop(PropDescriptor::required("title", "string", "Label rendered inside the button."))
    .prop(PropDescriptor::required("onPress", "(event: GestureResponderEvent) => void", "Called when the button is pressed."))
    .prop(
        PropDescriptor::optional("variant", "'primary' | 'secondary' | 'outline' | 'ghost'", "Visual style.")
            .default_value("'primary'"),
    )
    .prop(PropDescriptor::optional("size", "'sm' | 'md' | 'lg'", "Padding and font size preset.").default_value("'md'"))
    .prop(PropDescriptor::optional("disabled", "boolean", "Disables presses and dims the button.").default_value("false"))
    .prop(PropDescriptor::optional("loading", "boolean", "Replaces the label with a spinner and blocks presses.").default_value("false"))
    .prop(style_prop())
    .prop(test_id_prop())
    .sub_component("spinner")
    .example(ExampleDescriptor::new("Basic", "<Button title=\"Save\" onPress={save} />"))
    .example(
        ExampleDescriptor::new("Loading state", "<Button title=\"Saving\" loading onPress={save} />")
            .described("The press handler is not called while loading is true."),
    )
    .note("The ref is forwarded to the underlying Pressable.")
}

fn text_input() -> ComponentRecord {
    ComponentRecord::new(
        "text-input",
        "TextInput",
        Category::FormInputs,
        "Single or multi-line text field with label, helper text and error state.",
    )
    .prop(PropDescriptor::required("value", "string", "Current text."))
    .prop(PropDescriptor::required("onChangeText", "(text: string) => void", "Called with the new text on every edit."))
    .prop(PropDescriptor::optional("label", "string", "Label rendered above the field."))
    .prop(PropDescriptor::optional("placeholder", "string", "Hint shown when the value is empty."))
    .prop(PropDescriptor::optional("error", "string", "Error message; switches the field to its error style."))
    .prop(PropDescriptor::optional("multiline", "boolean", "Allows line breaks.").default_value("false"))
    .prop(PropDescriptor::optional("secureTextEntry", "boolean", "Obscures input for passwords.").default_value("false"))
    .prop(style_prop())
    .example(ExampleDescriptor::new(
        "Controlled field",
        "const [name, setName] = useState('');\n<TextInput label=\"Name\" value={name} onChangeText={setName} />",
    ))
    .note("All other TextInput props from react-native are passed through.")
}

fn checkbox() -> ComponentRecord {
    ComponentRecord::new(
        "checkbox",
        "Checkbox",
        Category::FormInputs,
        "A binary toggle rendered as a tickable box with an optional label.",
    )
    .prop(PropDescriptor::required("checked", "boolean", "Whether the box is ticked."))
    .prop(PropDescriptor::required("onChange", "(checked: boolean) => void", "Called with the new state."))
    .prop(PropDescriptor::optional("label", "string", "Text rendered beside the box."))
    .prop(PropDescriptor::optional("indeterminate", "boolean", "Shows a dash instead of a tick.").default_value("false"))
    .prop(PropDescriptor::optional("disabled", "boolean", "Blocks interaction.").default_value("false"))
    .example(ExampleDescriptor::new(
        "Terms",
        "<Checkbox label=\"I agree\" checked={agreed} onChange={setAgreed} />",
    ))
}

fn switch() -> ComponentRecord {
    ComponentRecord::new(
        "switch",
        "Switch",
        Category::FormInputs,
        "On/off toggle using the platform switch with themed track colours.",
    )
    .prop(PropDescriptor::required("value", "boolean", "Current state."))
    .prop(PropDescriptor::required("onValueChange", "(value: boolean) => void", "Called with the new state."))
    .prop(PropDescriptor::optional("disabled", "boolean", "Blocks interaction.").default_value("false"))
    .example(ExampleDescriptor::new(
        "Notifications",
        "<Switch value={enabled} onValueChange={setEnabled} />",
    ))
    .note("Track colours are ignored on iOS when the platform uses its native tint.")
}

fn select() -> ComponentRecord {
    ComponentRecord::new(
        "select",
        "Select",
        Category::FormInputs,
        "Dropdown picker that opens a modal list of options.",
    )
    .prop(PropDescriptor::required("options", "Array<{ label: string; value: string }>", "Choices to display."))
    .prop(PropDescriptor::required("value", "string | null", "Selected option value."))
    .prop(PropDescriptor::required("onChange", "(value: string) => void", "Called when an option is picked."))
    .prop(PropDescriptor::optional("placeholder", "string", "Text shown when nothing is selected.").default_value("'Select…'"))
    .prop(PropDescriptor::optional("searchable", "boolean", "Adds a filter field above the options.").default_value("false"))
    .sub_component("modal")
    .example(ExampleDescriptor::new(
        "Country picker",
        "<Select options={countries} value={country} onChange={setCountry} searchable />",
    ))
}

fn radio_group() -> ComponentRecord {
    ComponentRecord::new(
        "radio-group",
        "RadioGroup",
        Category::FormInputs,
        "Groups Radio items so that exactly one value is selected.",
    )
    .prop(PropDescriptor::required("value", "string", "Selected value."))
    .prop(PropDescriptor::required("onChange", "(value: string) => void", "Called when another radio is chosen."))
    .prop(PropDescriptor::required("children", "ReactNode", "Radio elements."))
    .prop(PropDescriptor::optional("direction", "'row' | 'column'", "Layout axis.").default_value("'column'"))
    .sub_component("radio")
    .example(ExampleDescriptor::new(
        "Plan choice",
        "<RadioGroup value={plan} onChange={setPlan}>\n  <Radio value=\"free\" label=\"Free\" />\n  <Radio value=\"pro\" label=\"Pro\" />\n</RadioGroup>",
    ))
}

fn radio() -> ComponentRecord {
    ComponentRecord::new(
        "radio",
        "Radio",
        Category::FormInputs,
        "A single option inside a RadioGroup.",
    )
    .prop(PropDescriptor::required("value", "string", "Value reported to the group when chosen."))
    .prop(PropDescriptor::optional("label", "string", "Text rendered beside the dot."))
    .prop(PropDescriptor::optional("disabled", "boolean", "Blocks interaction.").default_value("false"))
    .example(ExampleDescriptor::new("Option", "<Radio value=\"pro\" label=\"Pro\" />"))
    .note("Must be rendered inside a RadioGroup; it reads selection state from context.")
}

// ==================== Layout ====================

fn stack() -> ComponentRecord {
    ComponentRecord::new(
        "stack",
        "Stack",
        Category::Layout,
        "Flex container that spaces its children evenly along one axis.",
    )
    .prop(PropDescriptor::optional("direction", "'row' | 'column'", "Main axis.").default_value("'column'"))
    .prop(PropDescriptor::optional("gap", "number", "Space between children in points.").default_value("8"))
    .prop(PropDescriptor::optional("align", "FlexAlignType", "Cross-axis alignment."))
    .prop(PropDescriptor::optional("justify", "'flex-start' | 'center' | 'flex-end' | 'space-between'", "Main-axis distribution."))
    .prop(style_prop())
    .example(ExampleDescriptor::new(
        "Horizontal buttons",
        "<Stack direction=\"row\" gap={12}>\n  <Button title=\"Cancel\" onPress={close} />\n  <Button title=\"OK\" onPress={confirm} />\n</Stack>",
    ))
}

fn card() -> ComponentRecord {
    ComponentRecord::new(
        "card",
        "Card",
        Category::Layout,
        "Elevated surface that groups related content.",
    )
    .prop(PropDescriptor::required("children", "ReactNode", "Card content."))
    .prop(PropDescriptor::optional("padding", "number", "Inner spacing in points.").default_value("16"))
    .prop(PropDescriptor::optional("elevation", "0 | 1 | 2 | 3", "Shadow depth.").default_value("1"))
    .prop(PropDescriptor::optional("onPress", "() => void", "Makes the whole card pressable."))
    .prop(style_prop())
    .sub_component("card-header")
    .example(ExampleDescriptor::new(
        "Profile card",
        "<Card>\n  <CardHeader title=\"Ada\" subtitle=\"Engineer\" />\n  <Text>Bio…</Text>\n</Card>",
    ))
    .note("Android renders elevation natively; iOS approximates it with shadow props.")
}

fn card_header() -> ComponentRecord {
    ComponentRecord::new(
        "card-header",
        "CardHeader",
        Category::Layout,
        "Title row for a Card with optional subtitle and trailing action.",
    )
    .prop(PropDescriptor::required("title", "string", "Heading text."))
    .prop(PropDescriptor::optional("subtitle", "string", "Secondary line under the title."))
    .prop(PropDescriptor::optional("action", "ReactNode", "Element aligned to the trailing edge."))
    .example(ExampleDescriptor::new(
        "With action",
        "<CardHeader title=\"Orders\" action={<Button title=\"All\" variant=\"ghost\" onPress={open} />} />",
    ))
}

fn grid() -> ComponentRecord {
    ComponentRecord::new(
        "grid",
        "Grid",
        Category::Layout,
        "Wraps children into a fixed number of equal-width columns.",
    )
    .prop(PropDescriptor::required("columns", "number", "Number of columns."))
    .prop(PropDescriptor::optional("gap", "number", "Space between cells in points.").default_value("8"))
    .prop(PropDescriptor::required("children", "ReactNode", "Cells."))
    .example(ExampleDescriptor::new(
        "Photo grid",
        "<Grid columns={3} gap={4}>{photos.map(p => <Image key={p.id} source={p} />)}</Grid>",
    ))
    .note("Column width is computed from the container's onLayout width, so the first frame renders with zero width.")
}

fn divider() -> ComponentRecord {
    ComponentRecord::new(
        "divider",
        "Divider",
        Category::Layout,
        "Hairline separator between sections.",
    )
    .prop(PropDescriptor::optional("orientation", "'horizontal' | 'vertical'", "Line direction.").default_value("'horizontal'"))
    .prop(PropDescriptor::optional("inset", "number", "Leading indent in points.").default_value("0"))
    .example(ExampleDescriptor::new("Section break", "<Divider inset={16} />"))
}

// ==================== Data display ====================

fn table() -> ComponentRecord {
    ComponentRecord::new(
        "table",
        "Table",
        Category::DataDisplay,
        "Tabular data display with a header row, column definitions and optional sorting.",
    )
    .prop(PropDescriptor::required("columns", "Array<{ key: string; title: string; width?: number; sortable?: boolean }>", "Column definitions."))
    .prop(PropDescriptor::required("data", "Array<Record<string, unknown>>", "Rows, keyed by column key."))
    .prop(PropDescriptor::optional("onSort", "(key: string, direction: 'asc' | 'desc') => void", "Called when a sortable header is pressed."))
    .prop(PropDescriptor::optional("striped", "boolean", "Alternates row backgrounds.").default_value("false"))
    .prop(PropDescriptor::optional("emptyText", "string", "Shown when data is empty.").default_value("'No data'"))
    .sub_component("table-row")
    .sub_component("table-cell")
    .example(ExampleDescriptor::new(
        "Users",
        "<Table columns={[{ key: 'name', title: 'Name' }, { key: 'role', title: 'Role' }]} data={users} striped />",
    ))
    .example(
        ExampleDescriptor::new(
            "Custom rows",
            "<Table columns={cols} data={[]}>\n  {users.map(u => (\n    <TableRow key={u.id}>\n      <TableCell>{u.name}</TableCell>\n    </TableRow>\n  ))}\n</Table>",
        )
        .described("Children replace the generated rows when present."),
    )
    .note("Rows are rendered in a ScrollView, not a FlatList; use List for long data sets.")
}

fn table_row() -> ComponentRecord {
    ComponentRecord::new(
        "table-row",
        "TableRow",
        Category::DataDisplay,
        "One row of a Table.",
    )
    .import("import { TableRow } from '@rn-ui/core/table';")
    .prop(PropDescriptor::required("children", "ReactNode", "TableCell elements."))
    .prop(PropDescriptor::optional("onPress", "() => void", "Makes the row pressable."))
    .sub_component("table-cell")
    .example(ExampleDescriptor::new("Row", "<TableRow onPress={open}>{cells}</TableRow>"))
}

fn table_cell() -> ComponentRecord {
    ComponentRecord::new(
        "table-cell",
        "TableCell",
        Category::DataDisplay,
        "One cell of a TableRow.",
    )
    .import("import { TableCell } from '@rn-ui/core/table';")
    .prop(PropDescriptor::required("children", "ReactNode", "Cell content; strings are wrapped in Text."))
    .prop(PropDescriptor::optional("align", "'left' | 'center' | 'right'", "Text alignment.").default_value("'left'"))
    .example(ExampleDescriptor::new("Numeric cell", "<TableCell align=\"right\">{total}</TableCell>"))
}

fn list() -> ComponentRecord {
    ComponentRecord::new(
        "list",
        "List",
        Category::DataDisplay,
        "Virtualised list of items built on FlatList with separators and empty state.",
    )
    .prop(PropDescriptor::required("data", "T[]", "Items to render."))
    .prop(PropDescriptor::required("renderItem", "(item: T, index: number) => ReactNode", "Renders one item."))
    .prop(PropDescriptor::optional("keyExtractor", "(item: T) => string", "Stable key per item."))
    .prop(PropDescriptor::optional("separator", "boolean", "Draws a Divider between items.").default_value("true"))
    .prop(PropDescriptor::optional("emptyText", "string", "Shown when data is empty."))
    .sub_component("divider")
    .example(ExampleDescriptor::new(
        "Messages",
        "<List data={messages} keyExtractor={m => m.id} renderItem={m => <Text>{m.body}</Text>} />",
    ))
}

fn badge() -> ComponentRecord {
    ComponentRecord::new(
        "badge",
        "Badge",
        Category::DataDisplay,
        "Small pill that shows a count or short status label.",
    )
    .prop(PropDescriptor::required("label", "string | number", "Content of the pill."))
    .prop(PropDescriptor::optional("tone", "'neutral' | 'success' | 'warning' | 'danger'", "Colour scheme.").default_value("'neutral'"))
    .prop(PropDescriptor::optional("max", "number", "Numbers above this render as `max+`.").default_value("99"))
    .example(ExampleDescriptor::new("Unread count", "<Badge label={unread} tone=\"danger\" />"))
}

fn avatar() -> ComponentRecord {
    ComponentRecord::new(
        "avatar",
        "Avatar",
        Category::DataDisplay,
        "Circular user image that falls back to initials.",
    )
    .prop(PropDescriptor::optional("source", "ImageSourcePropType", "Image to show."))
    .prop(PropDescriptor::required("name", "string", "Used for initials and the accessibility label."))
    .prop(PropDescriptor::optional("size", "number", "Diameter in points.").default_value("40"))
    .example(ExampleDescriptor::new("Fallback", "<Avatar name=\"Grace Hopper\" />"))
}

// ==================== Feedback ====================

fn alert() -> ComponentRecord {
    ComponentRecord::new(
        "alert",
        "Alert",
        Category::Feedback,
        "Inline banner that highlights an informational, success, warning or error message.",
    )
    .prop(PropDescriptor::required("message", "string", "Body text."))
    .prop(PropDescriptor::optional("title", "string", "Bold heading above the message."))
    .prop(PropDescriptor::optional("tone", "'info' | 'success' | 'warning' | 'error'", "Colour and icon.").default_value("'info'"))
    .prop(PropDescriptor::optional("onDismiss", "() => void", "Shows a close button when set."))
    .example(ExampleDescriptor::new(
        "Error",
        "<Alert tone=\"error\" title=\"Upload failed\" message=\"Check your connection.\" />",
    ))
    .note("This is an in-layout banner, not the react-native Alert dialog API.")
}

fn toast() -> ComponentRecord {
    ComponentRecord::new(
        "toast",
        "Toast",
        Category::Feedback,
        "Transient message that slides in from the screen edge and hides itself.",
    )
    .import("import { ToastProvider, useToast } from '@rn-ui/core';")
    .prop(PropDescriptor::optional("duration", "number", "Milliseconds before hiding.").default_value("3000"))
    .prop(PropDescriptor::optional("position", "'top' | 'bottom'", "Screen edge.").default_value("'bottom'"))
    .example(
        ExampleDescriptor::new(
            "Show from a handler",
            "const toast = useToast();\ntoast.show({ message: 'Saved', tone: 'success' });",
        )
        .described("Wrap the app in ToastProvider once; call useToast anywhere below it."),
    )
    .note("Only one toast is visible at a time; new calls replace the current one.")
}

fn spinner() -> ComponentRecord {
    ComponentRecord::new(
        "spinner",
        "Spinner",
        Category::Feedback,
        "Indeterminate loading indicator wrapping ActivityIndicator with theme colours.",
    )
    .prop(PropDescriptor::optional("size", "'small' | 'large'", "Indicator size.").default_value("'small'"))
    .prop(PropDescriptor::optional("color", "string", "Overrides the theme colour."))
    .prop(PropDescriptor::optional("label", "string", "Accessibility label.").default_value("'Loading'"))
    .example(ExampleDescriptor::new("Centred", "<Stack align=\"center\"><Spinner size=\"large\" /></Stack>"))
}

fn modal() -> ComponentRecord {
    ComponentRecord::new(
        "modal",
        "Modal",
        Category::Feedback,
        "Dialog overlay with backdrop, title and action row.",
    )
    .prop(PropDescriptor::required("visible", "boolean", "Whether the modal is shown."))
    .prop(PropDescriptor::required("onClose", "() => void", "Called on backdrop press or hardware back."))
    .prop(PropDescriptor::optional("title", "string", "Heading text."))
    .prop(PropDescriptor::optional("actions", "ReactNode", "Buttons rendered in the footer."))
    .prop(PropDescriptor::optional("dismissable", "boolean", "Allows closing via the backdrop.").default_value("true"))
    .sub_component("button")
    .example(ExampleDescriptor::new(
        "Confirm",
        "<Modal visible={open} onClose={close} title=\"Delete?\" actions={<Button title=\"Delete\" onPress={remove} />} />",
    ))
}

// ==================== Navigation ====================

fn tabs() -> ComponentRecord {
    ComponentRecord::new(
        "tabs",
        "Tabs",
        Category::Navigation,
        "Horizontal tab bar that switches between sibling views.",
    )
    .prop(PropDescriptor::required("value", "string", "Key of the active tab."))
    .prop(PropDescriptor::required("onChange", "(value: string) => void", "Called when a tab is pressed."))
    .prop(PropDescriptor::required("children", "ReactNode", "Tab elements."))
    .prop(PropDescriptor::optional("scrollable", "boolean", "Lets the bar scroll when tabs overflow.").default_value("false"))
    .sub_component("tab")
    .example(ExampleDescriptor::new(
        "Two tabs",
        "<Tabs value={tab} onChange={setTab}>\n  <Tab value=\"feed\" label=\"Feed\" />\n  <Tab value=\"profile\" label=\"Profile\" />\n</Tabs>",
    ))
    .note("Tabs only renders the bar; render the active view yourself based on value.")
}

fn tab() -> ComponentRecord {
    ComponentRecord::new(
        "tab",
        "Tab",
        Category::Navigation,
        "A single entry in a Tabs bar.",
    )
    .prop(PropDescriptor::required("value", "string", "Key reported to Tabs."))
    .prop(PropDescriptor::required("label", "string", "Visible text."))
    .prop(PropDescriptor::optional("badge", "string | number", "Renders a Badge next to the label."))
    .sub_component("badge")
    .example(ExampleDescriptor::new("With badge", "<Tab value=\"inbox\" label=\"Inbox\" badge={3} />"))
}

fn breadcrumb() -> ComponentRecord {
    ComponentRecord::new(
        "breadcrumb",
        "Breadcrumb",
        Category::Navigation,
        "Trail of pressable links showing the path to the current screen.",
    )
    .prop(PropDescriptor::required("items", "Array<{ label: string; onPress?: () => void }>", "Path segments, root first."))
    .prop(PropDescriptor::optional("separator", "string", "Text between segments.").default_value("'/'"))
    .example(ExampleDescriptor::new(
        "Settings path",
        "<Breadcrumb items={[{ label: 'Home', onPress: goHome }, { label: 'Settings' }]} />",
    ))
}
