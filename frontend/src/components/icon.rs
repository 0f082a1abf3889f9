use leptos::*;

/// Icons available to the component library. Stroke-based, 24x24 viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    ChevronLeft,
    ChevronRight,
    ChevronUp,
    ChevronDown,
    Plus,
    Minus,
    Calendar,
    Search,
    Close,
    Check,
    User,
    Glasses,
    Copy,
    AlertCircle,
}

impl IconName {
    pub const ALL: [IconName; 14] = [
        IconName::ChevronLeft,
        IconName::ChevronRight,
        IconName::ChevronUp,
        IconName::ChevronDown,
        IconName::Plus,
        IconName::Minus,
        IconName::Calendar,
        IconName::Search,
        IconName::Close,
        IconName::Check,
        IconName::User,
        IconName::Glasses,
        IconName::Copy,
        IconName::AlertCircle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "chevron-left",
            IconName::ChevronRight => "chevron-right",
            IconName::ChevronUp => "chevron-up",
            IconName::ChevronDown => "chevron-down",
            IconName::Plus => "plus",
            IconName::Minus => "minus",
            IconName::Calendar => "calendar",
            IconName::Search => "search",
            IconName::Close => "close",
            IconName::Check => "check",
            IconName::User => "user",
            IconName::Glasses => "glasses",
            IconName::Copy => "copy",
            IconName::AlertCircle => "alert-circle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// SVG path data.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "M15 18l-6-6 6-6",
            IconName::ChevronRight => "M9 18l6-6-6-6",
            IconName::ChevronUp => "M18 15l-6-6-6 6",
            IconName::ChevronDown => "M6 9l6 6 6-6",
            IconName::Plus => "M12 5v14M5 12h14",
            IconName::Minus => "M5 12h14",
            IconName::Calendar => "M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2zM16 2v4M8 2v4M3 10h18",
            IconName::Search => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35",
            IconName::Close => "M18 6L6 18M6 6l12 12",
            IconName::Check => "M20 6L9 17l-5-5",
            IconName::User => "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            IconName::Glasses => "M2 14a4 4 0 1 0 8 0 4 4 0 0 0-8 0zM14 14a4 4 0 1 0 8 0 4 4 0 0 0-8 0zM10 14h4M2 14l2-7h2M22 14l-2-7h-2",
            IconName::Copy => "M9 9h11v11H9zM5 15H4V4h11v1",
            IconName::AlertCircle => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 8v4M12 16h.01",
        }
    }
}

/// Inline SVG icon.
#[component]
pub fn Icon(
    name: IconName,
    #[prop(optional)] size: Option<u32>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let size = size.unwrap_or(16);
    let full_class = icon_class(name, class.as_deref());
    let hidden = title.is_none();

    view! {
        <svg
            class=full_class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden=hidden.then_some("true")
            role=(!hidden).then_some("img")
        >
            {title.map(|t| view! { <title>{t}</title> })}
            <path d=name.path() />
        </svg>
    }
}

fn icon_class(name: IconName, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("icon icon-{} {}", name.name(), extra),
        None => format!("icon icon-{}", name.name()),
    }
}
