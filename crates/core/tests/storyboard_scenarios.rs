//! End-to-end storyboard scenarios: edits, identity linking and compilation
//! working together through the public API.

use scenecraft_core::catalog::{Category, AGE_GROUP_NO_PERSON, CONTENT_STYLE_PRODUCT};
use scenecraft_core::compiler::{phrases, scrub};
use scenecraft_core::cost::GenerationMode;
use scenecraft_core::identity::ReferenceImage;
use scenecraft_core::normalize::aliases_in_sync;
use scenecraft_core::product::{HeightUnit, ProductAsset};
use scenecraft_core::{ConfigEdit, EditOutcome, Storyboard, StoryboardSnapshot};

fn edit(category: Category, value: &str) -> ConfigEdit {
    ConfigEdit::new(category, value)
}

fn three_scene_board() -> Storyboard {
    let mut board = Storyboard::new();
    board.add_scene(None).expect("second scene");
    board.add_scene(None).expect("third scene");
    board.select_scene(1).expect("first scene exists");
    board
}

// ---------------------------------------------------------------------------
// Linking fan-out
// ---------------------------------------------------------------------------

/// Linking from a 26-35 female primary pushes that persona to every scene,
/// and a later gender edit on another scene is ignored.
#[test]
fn linking_fans_out_and_locks_non_primary_scenes() {
    let mut board = three_scene_board();
    board.apply_edit(&edit(Category::AgeGroup, "26-35"));
    board.apply_edit(&edit(Category::Gender, "female"));

    assert!(board.set_linked(true));
    for scene in board.scenes() {
        assert_eq!(scene.configuration.age_group, "26-35");
        assert_eq!(scene.configuration.model_age, "26-35");
        assert_eq!(scene.configuration.gender, "female");
        assert!(scene.identity.lock_enabled);
    }

    let second = board.scenes()[1].id;
    board.select_scene(second).unwrap();
    assert_eq!(board.apply_edit(&edit(Category::Gender, "male")), EditOutcome::Rejected);
    assert!(board.scenes().iter().all(|s| s.configuration.gender == "female"));
}

/// Only the primary scene writes identity; its edits reach the others.
#[test]
fn identity_has_a_single_writer() {
    let mut board = three_scene_board();
    board.set_linked(true);

    for index in 1..board.scenes().len() {
        let id = board.scenes()[index].id;
        board.select_scene(id).unwrap();
        assert_eq!(board.apply_edit(&edit(Category::SkinTone, "tan")), EditOutcome::Rejected);
    }

    board.select_scene(1).unwrap();
    assert_eq!(
        board.apply_edit(&edit(Category::SkinTone, "tan")),
        EditOutcome::Broadcast { scenes: 2 }
    );
    assert!(board.scenes().iter().all(|s| s.configuration.skin_tone == "tan"));
}

/// Unlinking keeps the propagated values but releases the lock.
#[test]
fn unlinking_releases_scenes() {
    let mut board = three_scene_board();
    board.apply_edit(&edit(Category::HairColor, "blonde"));
    board.set_linked(true);
    assert!(!board.set_linked(false));

    let third = board.scenes()[2].id;
    board.select_scene(third).unwrap();
    assert_eq!(board.apply_edit(&edit(Category::HairColor, "red")), EditOutcome::Applied);
    assert_eq!(board.scenes()[1].configuration.hair_color, "blonde");
    assert_eq!(board.scenes()[2].configuration.hair_color, "red");
}

// ---------------------------------------------------------------------------
// Subject presence
// ---------------------------------------------------------------------------

#[test]
fn product_content_style_compiles_without_person() {
    let mut board = Storyboard::new();
    board.apply_edit(&edit(Category::ContentStyle, CONTENT_STYLE_PRODUCT));
    board.apply_edit(&edit(Category::Expression, "big_smile"));

    let prompt = board.compile_active(&[]);
    assert!(prompt.contains(phrases::NO_PERSON_DIRECTIVE));
    assert!(!prompt.contains("a big laughing smile"));
    assert!(!prompt.contains("Feature one person"));

    let cost = board.cost_inputs_active();
    assert!(!cost.has_person);
    assert_eq!(cost.content_style, CONTENT_STYLE_PRODUCT);
}

#[test]
fn no_person_scene_cannot_be_linked() {
    let mut board = Storyboard::new();
    board.apply_edit(&edit(Category::AgeGroup, AGE_GROUP_NO_PERSON));
    assert!(!board.set_linked(true));
    assert!(!board.is_linked());
}

// ---------------------------------------------------------------------------
// Reference precedence
// ---------------------------------------------------------------------------

#[test]
fn reference_image_replaces_descriptive_identity() {
    let mut board = Storyboard::new();
    board.apply_edit(&edit(Category::Gender, "male"));
    board.apply_edit(&edit(Category::HairStyle, "braids"));

    let image = ReferenceImage::from_base64("iVBORw==", "image/png").unwrap();
    assert_eq!(board.attach_reference(image), EditOutcome::Applied);

    let prompt = board.compile_active(&[]);
    assert!(prompt.contains(phrases::PRESERVE_REFERENCE));
    assert!(!prompt.contains("Gender:"));
    assert!(!prompt.contains("braided"));
    assert!(board.cost_inputs_active().has_reference_identity);

    board.detach_reference();
    let prompt = board.compile_active(&[]);
    assert!(prompt.contains("Gender: man."));
}

// ---------------------------------------------------------------------------
// Compilation with products and modes
// ---------------------------------------------------------------------------

#[test]
fn studio_scene_with_products_and_custom_text() {
    let mut board = Storyboard::new();
    board.apply_preset(
        scenecraft_core::presets::PresetKind::Supplement,
        "bedside_wellness",
    )
    .unwrap();
    board.apply_edit(&edit(Category::Props, "a linen eye mask, not a new face"));
    board.set_custom_cues("Let a different model hold it");

    let mut flags = board.active_scene().mode_flags.clone();
    flags.pro_mode = true;
    board.set_mode_flags(flags);

    let products = [ProductAsset {
        id: "sku-1".to_string(),
        display_name: "Sleep Gummies".to_string(),
        height_value: Some(4.0),
        height_unit: HeightUnit::In,
        ..Default::default()
    }];
    let prompt = board.compile_active(&products);

    assert!(prompt.contains("Setting: a cozy bedroom."));
    assert!(prompt.contains("Size reference: Sleep Gummies is 4 in tall (~10.2 cm)."));
    assert!(prompt.contains("Technical:"));
    assert!(prompt.ends_with("Additional direction: Let a hold it"));
    assert!(!scrub::contains_conflicting_phrase(&prompt));
    assert_eq!(board.cost_inputs_active().mode, GenerationMode::Studio);
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_json_round_trip_restores_linked_board() {
    let mut board = three_scene_board();
    board.apply_edit(&edit(Category::Wardrobe, "loungewear"));
    board.set_linked(true);
    board
        .attach_reference(ReferenceImage::from_base64("iVBORw==", "image/png").unwrap());

    let json = serde_json::to_value(board.snapshot()).expect("snapshot serializes");
    assert_eq!(json["link"]["state"], "linked");
    assert_eq!(json["scenes"][2]["identity"]["reference_image"]["data"], "iVBORw==");

    let snapshot: StoryboardSnapshot = serde_json::from_value(json).expect("snapshot parses");
    let restored = Storyboard::from_snapshot(snapshot).expect("snapshot restores");
    assert_eq!(restored, board);
    assert!(restored
        .scenes()
        .iter()
        .all(|s| aliases_in_sync(&s.configuration)));
}
