use super::*;

#[test]
fn tool_slugs_are_unique() {
    let mut slugs: Vec<&str> = TOOLS.iter().map(|tool| tool.slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), TOOLS.len());
}

#[test]
fn every_tool_offers_at_least_one_format() {
    for tool in TOOLS {
        assert!(!tool.formats.is_empty(), "tool '{}' has no formats", tool.slug);
    }
}

#[test]
fn find_tool_resolves_known_slug() {
    let tool = find_tool("pdf").expect("pdf tool exists");
    assert_eq!(tool.title, "PDF Tools");
}

#[test]
fn find_tool_rejects_unknown_slug() {
    assert!(find_tool("floppy").is_none());
}

#[test]
fn tool_endpoint_formats_api_path() {
    assert_eq!(tool_endpoint("image"), "/api/image/convert");
}
