//! Static display palette for rendered tree entries
//!
//! Classification is by entry kind and, for files, filename extension.
//! The table is fixed; nothing mutates it at runtime.

use owo_colors::Style;
use std::path::Path;

/// What a rendered entry is, as far as styling cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

// CSS color values: aqua, orange, crimson, medium orchid, aquamarine,
// purple, pink, cadet blue, pale turquoise, green yellow, blue violet.
const AQUA: (u8, u8, u8) = (0, 255, 255);
const ORANGE: (u8, u8, u8) = (255, 165, 0);
const CRIMSON: (u8, u8, u8) = (220, 20, 60);
const MEDIUM_ORCHID: (u8, u8, u8) = (186, 85, 211);
const AQUA_MARINE: (u8, u8, u8) = (127, 255, 212);
const PURPLE: (u8, u8, u8) = (128, 0, 128);
const PINK: (u8, u8, u8) = (255, 192, 203);
const CADET_BLUE: (u8, u8, u8) = (95, 158, 160);
const PALE_TURQUOISE: (u8, u8, u8) = (175, 238, 238);
const GREEN_YELLOW: (u8, u8, u8) = (173, 255, 47);
const BLUE_VIOLET: (u8, u8, u8) = (138, 43, 226);

fn rgb((r, g, b): (u8, u8, u8)) -> Style {
    Style::new().truecolor(r, g, b)
}

/// Look up the display style for an entry.
pub fn style_for(kind: EntryKind, name: &str) -> Style {
    match kind {
        EntryKind::Directory => rgb(AQUA).bold(),
        EntryKind::File => match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some("py") => rgb(PINK),
            Some("pdf") => rgb(AQUA_MARINE),
            Some("tex") => rgb(BLUE_VIOLET),
            Some("txt") => rgb(MEDIUM_ORCHID),
            Some("ipynb") => rgb(CADET_BLUE),
            Some("json") => rgb(PALE_TURQUOISE),
            Some("md") => rgb(GREEN_YELLOW),
            Some("bib") => rgb(CRIMSON),
            Some("jpg" | "jpeg" | "png" | "JPG" | "JPEG" | "PNG") => rgb(CRIMSON),
            Some("mp4" | "mkv" | "mov" | "MOV") => rgb(PURPLE),
            _ => rgb(ORANGE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    fn painted(kind: EntryKind, name: &str) -> String {
        format!("{}", "label".style(style_for(kind, name)))
    }

    #[test]
    fn directories_and_files_get_distinct_styles() {
        assert_ne!(
            painted(EntryKind::Directory, "src"),
            painted(EntryKind::File, "src")
        );
    }

    #[test]
    fn extension_classification() {
        assert_eq!(painted(EntryKind::File, "a.py"), painted(EntryKind::File, "b.py"));
        assert_ne!(painted(EntryKind::File, "a.py"), painted(EntryKind::File, "a.txt"));
        // unclassified extensions share the generic file style
        assert_eq!(
            painted(EntryKind::File, "a.xyz"),
            painted(EntryKind::File, "no_extension")
        );
    }
}
