//! ARIA Support
//!
//! ARIA roles and the announced states, plus the static tables that map
//! them to the phrases a Japanese screen reader speaks.

use ariadoc_dom::ElementData;

/// Phrase announced for `<input type="password">` instead of the textbox one
pub const PASSWORD_PHRASE: &str = "編集可能、パスワード、テキスト";

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    Dialog,
    Link,
    MenuItem,
    Option,
    Radio,
    Slider,
    Switch,
    Tab,
    TextBox,

    // Document structure
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Presentation,
}

impl AriaRole {
    /// Parse a role token (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "dialog" => Self::Dialog,
            "link" => Self::Link,
            "menuitem" => Self::MenuItem,
            "option" => Self::Option,
            "radio" => Self::Radio,
            "slider" => Self::Slider,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "none" | "presentation" => Self::Presentation,
            _ => return None,
        })
    }

    /// Implicit role of an element.
    ///
    /// Only the elements the simulator announces are mapped; an `input` is
    /// classified by its `type` (missing or empty means text).
    pub fn from_element(elem: &ElementData) -> Option<Self> {
        match elem.tag_name.as_str() {
            "button" => Some(Self::Button),
            "a" => Some(Self::Link),
            "nav" => Some(Self::Navigation),
            "main" => Some(Self::Main),
            "aside" => Some(Self::Complementary),
            "input" => match input_type(elem).as_str() {
                "radio" => Some(Self::Radio),
                "checkbox" => Some(Self::Checkbox),
                "" | "text" | "email" | "password" => Some(Self::TextBox),
                _ => None,
            },
            _ => None,
        }
    }

    /// Announcement phrase; `None` for roles that are not spoken
    pub fn phrase(&self) -> Option<&'static str> {
        Some(match self {
            Self::Button => "ボタン",
            Self::Link => "リンク",
            Self::TextBox => "編集可能、テキスト",
            Self::Radio => "ラジオボタン",
            Self::Checkbox => "チェックボックス",
            Self::Navigation => "ナビゲーション",
            Self::Main => "メイン",
            Self::Complementary => "補足",
            Self::Region => "領域",
            Self::Alert => "警告",
            Self::Dialog => "ダイアログ",
            _ => return None,
        })
    }

    /// Check if role is widget
    pub fn is_widget(&self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Checkbox
                | Self::Link
                | Self::MenuItem
                | Self::Option
                | Self::Radio
                | Self::Slider
                | Self::Switch
                | Self::Tab
                | Self::TextBox
        )
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Self::Banner
                | Self::Complementary
                | Self::ContentInfo
                | Self::Form
                | Self::Main
                | Self::Navigation
                | Self::Region
                | Self::Search
        )
    }
}

/// Lower-cased, trimmed `type` of an element (empty when missing)
pub fn input_type(elem: &ElementData) -> String {
    elem.attr("type")
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// `input[type=checkbox]` or `input[type=radio]`
pub fn is_toggle_input(elem: &ElementData) -> bool {
    elem.is("input") && matches!(input_type(elem).as_str(), "checkbox" | "radio")
}

/// Announced state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaState {
    Disabled,
    Checked(bool),
    Invalid,
    Expanded(bool),
    Pressed(bool),
}

impl AriaState {
    /// States of an element in announcement order.
    ///
    /// Only states whose attribute is present contribute, except the
    /// checked state of checkbox/radio inputs which is always spoken.
    pub fn from_element(elem: &ElementData) -> Vec<Self> {
        let mut states = Vec::new();

        if elem.has_attr("disabled") {
            states.push(Self::Disabled);
        }
        if is_toggle_input(elem) {
            states.push(Self::Checked(elem.has_attr("checked")));
        }
        if elem.attr_is("aria-invalid", "true") {
            states.push(Self::Invalid);
        }
        if let Some(value) = elem.attr("aria-expanded") {
            states.push(Self::Expanded(value == "true"));
        }
        if let Some(value) = elem.attr("aria-pressed") {
            states.push(Self::Pressed(value == "true"));
        }

        states
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Disabled => "無効",
            Self::Checked(true) => "選択",
            Self::Checked(false) => "未選択",
            Self::Invalid => "無効な入力",
            Self::Expanded(true) => "展開",
            Self::Expanded(false) => "折りたたみ",
            Self::Pressed(true) => "押下",
            Self::Pressed(false) => "非押下",
        }
    }
}
