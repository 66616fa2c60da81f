use crate::de::lenient_string;
use crate::props::*;
use crate::style::StyleMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A single renderable content unit.
///
/// Persisted as `{id, type, content, props, style}`; the `type` tag selects
/// the typed payload held in [`ComponentKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComponent", into = "RawComponent")]
pub struct Component {
    pub id: String,
    /// Editor output. For most kinds this is already inline HTML.
    pub content: String,
    pub style: StyleMap,
    pub kind: ComponentKind,
}

/// Persisted shape of a component, before the props are typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawComponent {
    #[serde(deserialize_with = "lenient_string")]
    id: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    type_name: String,
    #[serde(deserialize_with = "lenient_string")]
    content: String,
    props: Value,
    style: StyleMap,
}

macro_rules! component_kinds {
    ($($tag:literal => $variant:ident($props:ty)),+ $(,)?) => {
        /// Closed set of component kinds, each with its own props payload.
        /// `Unknown` keeps components from other editor versions renderable.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ComponentKind {
            $($variant($props),)+
            Unknown { type_name: String, props: Value },
        }

        /// Every persisted type tag the model understands
        pub const KNOWN_TYPES: &[&str] = &[$($tag),+];

        impl ComponentKind {
            /// The persisted `type` tag
            pub fn type_name(&self) -> &str {
                match self {
                    $(ComponentKind::$variant(_) => $tag,)+
                    ComponentKind::Unknown { type_name, .. } => type_name,
                }
            }

            /// Default payload for a type tag; unrecognized tags become `Unknown`
            pub fn default_for(type_name: &str) -> ComponentKind {
                match type_name {
                    $($tag => ComponentKind::$variant(<$props>::default()),)+
                    other => ComponentKind::Unknown {
                        type_name: other.to_string(),
                        props: Value::Null,
                    },
                }
            }

            /// Decodes the props bag for `type_name`. Props that do not fit the
            /// kind's shape are replaced by its defaults.
            pub fn decode(type_name: &str, props: Value) -> ComponentKind {
                match type_name {
                    $($tag => ComponentKind::$variant(decode_props::<$props>(type_name, props)),)+
                    other => ComponentKind::Unknown {
                        type_name: other.to_string(),
                        props,
                    },
                }
            }

            fn props_value(&self) -> Value {
                match self {
                    $(ComponentKind::$variant(props) => {
                        serde_json::to_value(props).unwrap_or_default()
                    })+
                    ComponentKind::Unknown { props, .. } => props.clone(),
                }
            }
        }
    };
}

component_kinds! {
    "heading" => Heading(HeadingProps),
    "paragraph" => Paragraph(ParagraphProps),
    "bulletList" => BulletList(BulletListProps),
    "button" => Button(ButtonProps),
    "divider" => Divider(DividerProps),
    "spacer" => Spacer(SpacerProps),
    "image" => Image(ImageProps),
    "gallery" => Gallery(GalleryProps),
    "video" => Video(VideoProps),
    "audio" => Audio(AudioProps),
    "quiz" => Quiz(QuizProps),
    "codeSnippet" => CodeSnippet(CodeSnippetProps),
    "table" => Table(TableProps),
    "timeline" => Timeline(TimelineProps),
    "accordion" => Accordion(AccordionProps),
    "infoCard" => InfoCard(InfoCardProps),
    "highlightBox" => HighlightBox(HighlightBoxProps),
    "iconList" => IconList(IconListProps),
    "stepProcess" => StepProcess(StepProcessProps),
    "exampleBox" => ExampleBox(ExampleBoxProps),
    "category" => Category(CategoryProps),
    "author" => Author(AuthorProps),
    "summary" => Summary(SummaryProps),
    "tituloConIcono" => TituloConIcono(TituloConIconoProps),
    "herramientas" => Herramientas(HerramientasProps),
    "respaldadoPor" => RespaldadoPor(RespaldadoPorProps),
    "noteContainer" => NoteContainer(NoteContainerProps),
}

/// Decodes a props bag key by key. A key whose value does not fit its field
/// is dropped, so that field alone takes the kind's default.
fn decode_props<P>(type_name: &str, props: Value) -> P
where
    P: Default + DeserializeOwned,
{
    let entries = match props {
        Value::Object(entries) => entries,
        Value::Null => return P::default(),
        other => {
            warn!(component_type = type_name, props = %other, "props are not an object, using defaults");
            return P::default();
        }
    };

    if let Ok(decoded) = serde_json::from_value(Value::Object(entries.clone())) {
        return decoded;
    }

    let kept: Map<String, Value> = entries
        .into_iter()
        .filter(|(key, value)| {
            let single = Map::from_iter([(key.clone(), value.clone())]);
            let fits = serde_json::from_value::<P>(Value::Object(single)).is_ok();
            if !fits {
                warn!(component_type = type_name, field = %key, "prop does not fit, using default");
            }
            fits
        })
        .collect();

    serde_json::from_value(Value::Object(kept)).unwrap_or_default()
}

impl ComponentKind {
    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Unknown { .. })
    }
}

/// Content a freshly created component starts with
pub fn default_content(type_name: &str) -> &'static str {
    match type_name {
        "heading" => "Nuevo título",
        "paragraph" => "Escribe tu texto aquí",
        "category" => "Categoría",
        "summary" => "Escribe aquí el resumen",
        "infoCard" => "Contenido de la tarjeta",
        "highlightBox" => "Texto destacado",
        "exampleBox" => "Describe aquí el ejemplo",
        "tituloConIcono" => "Título de sección",
        _ => "",
    }
}

impl Component {
    /// A new component of `kind` with a fresh id, default content and no styles
    pub fn new(kind: ComponentKind) -> Self {
        let content = default_content(kind.type_name()).to_string();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            style: StyleMap::new(),
            kind,
        }
    }

    /// A new component with default props for the given type tag
    pub fn with_defaults(type_name: &str) -> Self {
        Self::new(ComponentKind::default_for(type_name))
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// Components nested under this one (only `noteContainer` has any)
    pub fn children(&self) -> &[Component] {
        match &self.kind {
            ComponentKind::NoteContainer(props) => &props.components_data,
            _ => &[],
        }
    }
}

impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        let id = if raw.id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            raw.id
        };
        Self {
            id,
            content: raw.content,
            style: raw.style,
            kind: ComponentKind::decode(&raw.type_name, raw.props),
        }
    }
}

impl From<Component> for RawComponent {
    fn from(component: Component) -> Self {
        Self {
            props: component.kind.props_value(),
            type_name: component.kind.type_name().to_string(),
            id: component.id,
            content: component.content,
            style: component.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Alignment;

    #[test]
    fn test_decode_known_type() {
        let json = r#"{
            "id": "c1",
            "type": "image",
            "content": "",
            "props": {"src": "https://cdn.example.com/a.png", "alt": "A"},
            "style": {"borderRadius": 8}
        }"#;

        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.id, "c1");
        assert_eq!(component.type_name(), "image");
        match &component.kind {
            ComponentKind::Image(props) => {
                assert_eq!(props.src, "https://cdn.example.com/a.png");
                assert_eq!(props.alt, "A");
            }
            other => panic!("Expected image, got {:?}", other),
        }
        assert_eq!(component.style.len(), 1);
    }

    #[test]
    fn test_decode_unknown_type_keeps_props() {
        let json = r#"{"id": "x", "type": "doesNotExist", "content": "hola", "props": {"a": 1}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        assert!(!component.kind.is_known());
        assert_eq!(component.type_name(), "doesNotExist");
        assert_eq!(component.content, "hola");
    }

    #[test]
    fn test_loose_field_values_are_tolerated() {
        let json = r#"{"id": "q", "type": "quiz", "props": {"options": "not a list", "question": ["?"]}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        match component.kind {
            ComponentKind::Quiz(props) => {
                assert!(props.options.is_empty());
                assert_eq!(props.question, "");
            }
            other => panic!("Expected quiz, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_props_fall_back_to_defaults() {
        let json = r#"{"id": "t", "type": "table", "props": {"headerBackground": 5, "borderColor": ["x"]}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        match component.kind {
            ComponentKind::Table(props) => assert_eq!(props, TableProps::default()),
            other => panic!("Expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_align_keeps_image_source() {
        for align in ["null", "\"justify\"", "3"] {
            let json = format!(
                r#"{{"type": "image", "props": {{"src": "https://cdn.example.com/a.png", "alt": "A", "align": {}}}}}"#,
                align
            );
            let component: Component = serde_json::from_str(&json).unwrap();

            match component.kind {
                ComponentKind::Image(props) => {
                    assert_eq!(props.src, "https://cdn.example.com/a.png");
                    assert_eq!(props.alt, "A");
                    assert_eq!(props.align, Alignment::Center);
                }
                other => panic!("Expected image, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_null_color_keeps_button_text() {
        let json = r#"{"type": "button", "props": {"text": "Comprar ya", "backgroundColor": null, "align": "left"}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        match component.kind {
            ComponentKind::Button(props) => {
                assert_eq!(props.text, "Comprar ya");
                assert_eq!(props.background_color, "#007bff");
                assert_eq!(props.align, Alignment::Left);
            }
            other => panic!("Expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_table_cells_may_be_numbers() {
        let json = r#"{"type": "table", "props": {"headers": ["Año", "Total"], "rows": [["2024", 15]], "headerBackground": null}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        match component.kind {
            ComponentKind::Table(props) => {
                assert_eq!(props.headers, vec!["Año", "Total"]);
                assert_eq!(props.rows, vec![vec!["2024".to_string(), "15".to_string()]]);
                assert_eq!(props.header_background, "#f5f5f5");
            }
            other => panic!("Expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_accordion_null_header_color() {
        let json = r#"{"type": "accordion", "props": {"items": [{"title": "Uno", "content": "a"}], "headerColor": null}}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        match component.kind {
            ComponentKind::Accordion(props) => {
                assert_eq!(props.items.len(), 1);
                assert_eq!(props.items[0].title, "Uno");
                assert_eq!(props.header_color, "#f5f5f5");
            }
            other => panic!("Expected accordion, got {:?}", other),
        }
    }

    #[test]
    fn test_array_style_is_empty() {
        let json = r#"{"type": "paragraph", "content": "hola", "style": []}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        assert!(matches!(component.kind, ComponentKind::Paragraph(_)));
        assert_eq!(component.content, "hola");
        assert!(component.style.is_empty());
    }

    #[test]
    fn test_missing_id_is_generated() {
        let component: Component =
            serde_json::from_str(r#"{"type": "divider"}"#).unwrap();
        assert!(!component.id.is_empty());
    }

    #[test]
    fn test_new_component_has_default_content() {
        let heading = Component::with_defaults("heading");
        assert_eq!(heading.content, "Nuevo título");
        assert!(matches!(heading.kind, ComponentKind::Heading(_)));

        let other = Component::with_defaults("marquee");
        assert_eq!(other.type_name(), "marquee");
    }

    #[test]
    fn test_serialize_keeps_persisted_shape() {
        let component = Component::with_defaults("spacer").with_id("s1");
        let value = serde_json::to_value(&component).unwrap();

        assert_eq!(value["id"], "s1");
        assert_eq!(value["type"], "spacer");
        assert!(value["props"].is_object());

        let back: Component = serde_json::from_value(value).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn test_note_container_children() {
        let json = r##"{
            "id": "nc",
            "type": "noteContainer",
            "props": {
                "componentsData": [
                    {"id": "h", "type": "heading", "content": "Dentro"},
                    {"id": "p", "type": "paragraph", "content": "<em>texto</em>"}
                ],
                "borderColor": "#ccc"
            }
        }"##;
        let component: Component = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = component.children().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["h", "p"]);
    }
}
