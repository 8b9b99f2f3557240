use skills_lpp::category::{categorize, Category, PALETTE};
use skills_lpp::display_name;

#[test]
fn docker_with_ordinal_prefix_is_a_tool() {
    assert_eq!(categorize("3 Docker"), Category::ToolsSystems);
    assert_eq!(display_name("3 Docker"), "Docker");
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(categorize("1 PYTHON"), Category::Programming);
    assert_eq!(categorize("linux"), Category::ToolsSystems);
}

#[test]
fn unknown_names_fall_back_to_other() {
    assert_eq!(categorize("4 Woodworking"), Category::Other);
    assert_eq!(categorize(""), Category::Other);
}

#[test]
fn ties_resolve_by_category_priority() {
    // bash is a programming keyword, git a tools keyword; programming is
    // listed first so it wins
    assert_eq!(categorize("Git Bash"), Category::Programming);
}

#[test]
fn short_keywords_only_match_whole_tokens() {
    assert_eq!(categorize("12 R"), Category::Programming);
    assert_eq!(categorize("7 Go"), Category::Programming);
    // Docker contains an r and Google Cloud contains a go, neither is a language
    assert_eq!(categorize("Docker"), Category::ToolsSystems);
    assert_eq!(categorize("2 Google Cloud"), Category::PlatformsCloud);
    assert_eq!(categorize("Hugo"), Category::FrameworksLibraries);
}

#[test]
fn categorize_is_deterministic() {
    for name in ["3 Docker", "1 Python", "something new", "Qt"] {
        assert_eq!(categorize(name), categorize(name));
    }
}

#[test]
fn sort_ranks_swap_platforms_ahead_of_protocols() {
    assert_eq!(Category::Programming.sort_rank(), 0);
    assert_eq!(Category::ToolsSystems.sort_rank(), 1);
    assert_eq!(Category::PlatformsCloud.sort_rank(), 2);
    assert_eq!(Category::ProtocolsStandards.sort_rank(), 3);
    assert_eq!(Category::FrameworksLibraries.sort_rank(), 4);
    assert_eq!(Category::Other.sort_rank(), 5);
}

#[test]
fn every_category_gets_a_palette_color() {
    let categories = [
        Category::Programming,
        Category::ToolsSystems,
        Category::ProtocolsStandards,
        Category::PlatformsCloud,
        Category::FrameworksLibraries,
        Category::Other,
    ];
    for category in categories {
        assert_eq!(category.color(), PALETTE[category.index() % PALETTE.len()]);
    }
}

#[test]
fn display_names_keep_everything_after_the_first_space() {
    assert_eq!(display_name("1 Google Cloud"), "Google Cloud");
    assert_eq!(display_name("Python"), "Python");
}
