//! Card presets. Opaque to the text pipeline; the renderer consumes them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioPreset {
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

pub const RATIO_PRESETS: [RatioPreset; 6] = [
    RatioPreset {
        key: "4:5",
        width: 1080,
        height: 1350,
        label: "Portrait 4:5 (1080×1350) – recommended",
    },
    RatioPreset {
        key: "1:1",
        width: 1080,
        height: 1080,
        label: "Square 1:1 (1080×1080) – recommended",
    },
    RatioPreset {
        key: "16:9",
        width: 1920,
        height: 1080,
        label: "Landscape 16:9 (1920×1080) – common",
    },
    RatioPreset {
        key: "1.91:1",
        width: 1200,
        height: 628,
        label: "Landscape 1.91:1 (1200×628) – link format",
    },
    RatioPreset {
        key: "2:3",
        width: 1080,
        height: 1620,
        label: "Tall 2:3 (1080×1620) – carousel alt",
    },
    RatioPreset {
        key: "9:16",
        width: 1080,
        height: 1920,
        label: "Vertical 9:16 (1080×1920) – mobile-first",
    },
];

impl RatioPreset {
    /// Lookup by key; unknown keys fall back to the first (portrait) preset.
    pub fn find(key: &str) -> &'static RatioPreset {
        RATIO_PRESETS
            .iter()
            .find(|r| r.key == key)
            .unwrap_or(&RATIO_PRESETS[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub bg1: &'static str,
    pub bg2: &'static str,
    pub gradient: bool,
    pub fg: &'static str,
    pub accent: &'static str,
}

pub const THEME_PRESETS: [ThemePreset; 5] = [
    ThemePreset {
        name: "Clean Light",
        bg1: "#ffffff",
        bg2: "#ffffff",
        gradient: false,
        fg: "#0f172a",
        accent: "#2563eb",
    },
    ThemePreset {
        name: "Classic Blue",
        bg1: "#0ea5e9",
        bg2: "#0369a1",
        gradient: true,
        fg: "#ffffff",
        accent: "#ffffff",
    },
    ThemePreset {
        name: "Charcoal",
        bg1: "#0b0f19",
        bg2: "#0b0f19",
        gradient: false,
        fg: "#eef2ff",
        accent: "#60a5fa",
    },
    ThemePreset {
        name: "Violet Fade",
        bg1: "#8b5cf6",
        bg2: "#6d28d9",
        gradient: true,
        fg: "#ffffff",
        accent: "#ffffff",
    },
    ThemePreset {
        name: "Mint",
        bg1: "#34d399",
        bg2: "#10b981",
        gradient: true,
        fg: "#052e2b",
        accent: "#052e2b",
    },
];

impl ThemePreset {
    pub fn find(name: &str) -> &'static ThemePreset {
        THEME_PRESETS
            .iter()
            .find(|t| t.name == name)
            .unwrap_or(&THEME_PRESETS[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub label: &'static str,
    pub family: &'static str,
}

pub const FONT_PRESETS: [FontPreset; 5] = [
    FontPreset {
        label: "System Sans",
        family: "system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif",
    },
    FontPreset {
        label: "Serif",
        family: "Georgia, 'Times New Roman', Times, serif",
    },
    FontPreset {
        label: "Inter",
        family: "'Inter', ui-sans-serif, system-ui",
    },
    FontPreset {
        label: "IBM Plex Sans",
        family: "'IBM Plex Sans', ui-sans-serif, system-ui",
    },
    FontPreset {
        label: "Poppins",
        family: "'Poppins', ui-sans-serif, system-ui",
    },
];

impl FontPreset {
    pub fn find(label: &str) -> &'static FontPreset {
        FONT_PRESETS
            .iter()
            .find(|f| f.label == label)
            .unwrap_or(&FONT_PRESETS[0])
    }
}
