use tetragraph_core::model::{Membership, VariantTag, ViewContext, active_variants};
use tetragraph_core::select::{edge_on_path, translate};

fn path(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

#[test]
fn empty_path_clears_every_context() {
    let active = active_variants(4);
    for context in [
        ViewContext::Single(VariantTag::O),
        ViewContext::Separated,
        ViewContext::Overlaid,
        ViewContext::Merged,
    ] {
        assert!(translate(&[], context, active).is_empty());
    }
}

#[test]
fn single_view_marks_one_variant() {
    let ids = translate(
        &path(&["A", "B", "C"]),
        ViewContext::Single(VariantTag::A2),
        active_variants(3),
    );
    assert_eq!(ids, vec!["Aa2", "Ba2", "Ca2"]);
}

#[test]
fn overlaid_view_fans_out_per_active_variant() {
    let active = Membership::of(&[VariantTag::O, VariantTag::A1, VariantTag::A2]);
    let ids = translate(&path(&["A", "B"]), ViewContext::Overlaid, active);

    assert_eq!(ids.len(), 6); // 2 labels x 3 active variants
    for id in &ids {
        assert!(id.ends_with("_overlay"), "{id} lacks the overlay suffix");
    }
    assert!(ids.contains(&"Ao_overlay".to_string()));
    assert!(ids.contains(&"Aa1_overlay".to_string()));
    assert!(ids.contains(&"Aa2_overlay".to_string()));
    assert!(ids.contains(&"Ba2_overlay".to_string()));
}

#[test]
fn separated_view_uses_the_sep_namespace() {
    let ids = translate(&path(&["A"]), ViewContext::Separated, active_variants(2));
    assert_eq!(ids, vec!["Ao_sep", "Aa1_sep"]);
}

#[test]
fn merged_view_emits_one_id_per_union_node() {
    let ids = translate(&path(&["A", "B"]), ViewContext::Merged, active_variants(4));
    assert_eq!(ids, vec!["A_merged", "B_merged"]);
}

#[test]
fn four_variant_fan_out_includes_alpha_three() {
    let ids = translate(&path(&["A"]), ViewContext::Separated, active_variants(4));
    assert_eq!(ids, vec!["Ao_sep", "Aa1_sep", "Aa2_sep", "Aa3_sep"]);
}

#[test]
fn edge_emphasis_matches_consecutive_pairs_in_either_direction() {
    let p = path(&["A", "B", "C"]);
    assert!(edge_on_path(&p, "A", "B"));
    assert!(edge_on_path(&p, "B", "A"));
    assert!(edge_on_path(&p, "B", "C"));
    assert!(!edge_on_path(&p, "A", "C")); // on the path but not consecutive
    assert!(!edge_on_path(&p, "C", "D"));
    assert!(!edge_on_path(&path(&["A"]), "A", "A"));
}
