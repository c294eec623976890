//! Tool catalog: the conversion categories offered by the backend.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

/// One tool category: a home-grid card plus a conversion form.
#[derive(Clone, Copy, Debug)]
pub struct ToolEntry {
    /// URL segment and backend API prefix.
    pub slug: &'static str,
    /// Card/page heading.
    pub title: &'static str,
    /// Card/page description line.
    pub subtitle: &'static str,
    /// Output formats offered by the conversion form.
    pub formats: &'static [&'static str],
}

/// Every tool category, in home-grid order.
pub const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        slug: "doc",
        title: "Document Tools",
        subtitle: "Convert Word and OpenDocument text files.",
        formats: &["pdf", "docx", "odt", "txt"],
    },
    ToolEntry {
        slug: "xls",
        title: "Spreadsheet Tools",
        subtitle: "Convert Excel and OpenDocument spreadsheets.",
        formats: &["pdf", "xlsx", "ods", "csv"],
    },
    ToolEntry {
        slug: "ppt",
        title: "Presentation Tools",
        subtitle: "Convert PowerPoint and Impress decks.",
        formats: &["pdf", "pptx", "odp"],
    },
    ToolEntry {
        slug: "pdf",
        title: "PDF Tools",
        subtitle: "Convert, merge, compress and repair PDF files.",
        formats: &["docx", "png", "jpg", "txt"],
    },
    ToolEntry {
        slug: "image",
        title: "Image Tools",
        subtitle: "Convert, resize, compress and enhance images.",
        formats: &["png", "jpg", "webp", "bmp", "pdf"],
    },
    ToolEntry {
        slug: "audio",
        title: "Audio Tools",
        subtitle: "Convert and check audio files.",
        formats: &["mp3", "ogg", "wav", "flac"],
    },
    ToolEntry {
        slug: "video",
        title: "Video Tools",
        subtitle: "Convert, resize and enhance video files.",
        formats: &["mp4", "webm", "mkv", "avi"],
    },
    ToolEntry {
        slug: "text",
        title: "Text Tools",
        subtitle: "Convert and validate structured text files.",
        formats: &["json", "yaml", "toml", "xml"],
    },
];

/// Look a tool up by its URL segment.
#[must_use]
pub fn find_tool(slug: &str) -> Option<&'static ToolEntry> {
    TOOLS.iter().find(|tool| tool.slug == slug)
}

/// Backend conversion endpoint for a tool.
#[must_use]
pub fn tool_endpoint(slug: &str) -> String {
    format!("/api/{slug}/convert")
}
