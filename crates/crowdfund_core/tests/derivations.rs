use crowdfund_core::{
    count, filter_by, filter_funded, filter_unfunded, funding_percentage, progress_width, search,
    sort_by, sort_by_label, sorted_copy, top_n, total_backers, total_pledged, FilterMode, Project,
    SortCriterion,
};

fn project(name: &str, backers: u64, pledged: f64, goal: f64) -> Project {
    Project::new(name, "", "", backers, pledged, goal).expect("valid project")
}

fn sample() -> Vec<Project> {
    vec![
        project("Neon Courier", 412, 18_760.0, 55_000.0),
        project("Dragon Quest", 3_840, 128_450.0, 100_000.0),
        project("abyssal choir", 2_204, 61_005.0, 60_000.0),
        project("Orchard Tycoon", 96, 3_120.0, 25_000.0),
    ]
}

fn names(items: &[Project]) -> Vec<&str> {
    items.iter().map(Project::name).collect()
}

#[test]
fn empty_search_returns_whole_collection_in_order() {
    let items = sample();
    assert_eq!(search(&items, ""), items);
}

#[test]
fn search_is_case_insensitive_on_name() {
    let items = sample();
    let hits = search(&items, "DRAGON");
    assert_eq!(names(&hits), vec!["Dragon Quest"]);
}

#[test]
fn search_matches_description() {
    let items = vec![
        project("Sky Forge", 1, 1.0, 2.0),
        Project::new("Mecha Kitchen", "Giant robot cooking", "", 1, 1.0, 2.0)
            .expect("valid project"),
    ];
    let hits = search(&items, "robot");
    assert_eq!(names(&hits), vec!["Mecha Kitchen"]);
}

#[test]
fn search_keeps_relative_order() {
    let items = sample();
    let hits = search(&items, "A");
    assert_eq!(
        names(&hits),
        vec!["Dragon Quest", "abyssal choir", "Orchard Tycoon"]
    );
    let hits = search(&items, "no such game");
    assert!(hits.is_empty());
}

#[test]
fn sort_by_name_is_ascending_ignoring_case() {
    let items = sample();
    let sorted = sort_by(&items, SortCriterion::Name);
    assert_eq!(
        names(&sorted),
        vec!["abyssal choir", "Dragon Quest", "Neon Courier", "Orchard Tycoon"]
    );
}

#[test]
fn sort_by_name_places_accented_names_with_their_base_letter() {
    let items = vec![
        project("Zelda Rising", 1, 1.0, 2.0),
        project("Éclair Kitchen", 1, 1.0, 2.0),
        project("Ember", 1, 1.0, 2.0),
    ];
    let sorted = sort_by(&items, SortCriterion::Name);
    assert_eq!(names(&sorted), vec!["Éclair Kitchen", "Ember", "Zelda Rising"]);
}

#[test]
fn sort_by_name_puts_lowercase_before_uppercase_twin() {
    let items = vec![
        project("Quest", 1, 1.0, 2.0),
        project("quest", 2, 1.0, 2.0),
        project("Öl Baron", 3, 1.0, 2.0),
    ];
    let sorted = sort_by(&items, SortCriterion::Name);
    assert_eq!(names(&sorted), vec!["Öl Baron", "quest", "Quest"]);
}

#[test]
fn sort_by_pledged_and_backers_are_descending() {
    let items = sample();
    let by_pledged = sort_by(&items, SortCriterion::Pledged);
    assert!(by_pledged
        .windows(2)
        .all(|pair| pair[0].pledged() >= pair[1].pledged()));

    let by_backers = sort_by(&items, SortCriterion::Backers);
    assert_eq!(
        names(&by_backers),
        vec!["Dragon Quest", "abyssal choir", "Neon Courier", "Orchard Tycoon"]
    );
}

#[test]
fn sorting_leaves_source_untouched() {
    let items = sample();
    let before = items.clone();
    let _ = sort_by(&items, SortCriterion::Pledged);
    let _ = top_n(&items, 2);
    let _ = sorted_copy(&items, |a, b| a.backers().cmp(&b.backers()));
    assert_eq!(items, before);
}

#[test]
fn unknown_sort_label_keeps_identity_order() {
    let items = sample();
    let outcome = sort_by_label(&items, "rating");
    assert!(outcome.is_unknown_criterion());
    assert_eq!(outcome.items, items);

    let outcome = sort_by_label(&items, "backers");
    assert_eq!(outcome.criterion, Some(SortCriterion::Backers));
    assert_eq!(outcome.items[0].name(), "Dragon Quest");
}

#[test]
fn funded_and_unfunded_partition_collection() {
    let items = sample();
    let funded = filter_funded(&items);
    let unfunded = filter_unfunded(&items);

    assert_eq!(count(&funded) + count(&unfunded), count(&items));
    assert_eq!(names(&funded), vec!["Dragon Quest", "abyssal choir"]);
    assert_eq!(names(&unfunded), vec!["Neon Courier", "Orchard Tycoon"]);
    assert!(funded.iter().all(|p| !unfunded.contains(p)));

    assert_eq!(filter_by(&items, FilterMode::All), items);
    assert_eq!(filter_by(&items, FilterMode::Funded), funded);
    assert_eq!(filter_by(&items, FilterMode::Unfunded), unfunded);
}

#[test]
fn totals_sum_fields() {
    let items = vec![project("a", 10, 1.0, 5.0), project("b", 25, 2.5, 5.0)];
    assert_eq!(total_backers(&items), 35);
    assert_eq!(total_pledged(&items), 3.5);
    assert_eq!(count(&items), 2);
}

#[test]
fn total_backers_saturates_instead_of_overflowing() {
    let items = vec![
        project("Whale", u64::MAX, 1.0, 2.0),
        project("Minnow", 1, 1.0, 2.0),
    ];
    assert_eq!(total_backers(&items), u64::MAX);
}

#[test]
fn empty_collection_yields_identities() {
    let empty: Vec<Project> = Vec::new();
    assert_eq!(total_backers(&empty), 0);
    assert_eq!(total_pledged(&empty), 0.0);
    assert_eq!(count(&empty), 0);
    assert!(search(&empty, "x").is_empty());
    assert!(sort_by(&empty, SortCriterion::Name).is_empty());
    assert!(filter_funded(&empty).is_empty());
    assert!(filter_unfunded(&empty).is_empty());
    assert!(top_n(&empty, 2).is_empty());
}

#[test]
fn top_two_picks_highest_pledged_first() {
    let items = vec![
        project("mid", 1, 500.0, 1_000.0),
        project("best", 1, 9_000.0, 1_000.0),
        project("low", 1, 100.0, 1_000.0),
    ];
    let top = top_n(&items, 2);
    assert_eq!(names(&top), vec!["best", "mid"]);
}

#[test]
fn top_n_handles_small_collections_zero_and_ties() {
    let items = vec![
        project("first", 1, 700.0, 1_000.0),
        project("second", 1, 700.0, 1_000.0),
        project("third", 1, 900.0, 1_000.0),
    ];
    assert!(top_n(&items, 0).is_empty());
    assert_eq!(top_n(&items, 10).len(), 3);
    assert_eq!(names(&top_n(&items, 3)), vec!["third", "first", "second"]);
}

#[test]
fn funding_percentage_and_bar_width() {
    let quarter = project("q", 0, 50.0, 200.0);
    assert_eq!(funding_percentage(&quarter), 25);
    assert_eq!(progress_width(&quarter), 25);

    let over = project("o", 0, 250.0, 200.0);
    assert_eq!(funding_percentage(&over), 125);
    assert_eq!(progress_width(&over), 100);
}
