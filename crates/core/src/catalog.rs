//! Option catalogs for every configuration category.
//!
//! Each category owns a fixed, ordered list of [`CatalogOption`]s. The first
//! option of every list is the category default. The `phrase` of an option is
//! the fragment the prompt compiler emits for it; an empty phrase means the
//! option contributes nothing to the compiled text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Well-known values
// ---------------------------------------------------------------------------

/// Content style value meaning "product only, never a person".
pub const CONTENT_STYLE_PRODUCT: &str = "product";

/// Age group value meaning "no person in the scene".
pub const AGE_GROUP_NO_PERSON: &str = "no_person";

/// Marker value for categories whose free text lives in a side field.
pub const CUSTOM_VALUE: &str = "custom";

/// Product placement that needs a hand to hold the product.
pub const PLACEMENT_IN_HAND: &str = "in_hand";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One configurable dimension of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Style
    ContentStyle,
    CompositionMode,
    AspectRatio,
    CreatorPreset,
    Platform,
    Mood,
    ImageQuality,
    // Camera
    CameraDevice,
    CameraDistance,
    CameraAngle,
    CameraShot,
    Lens,
    DepthOfField,
    // Lighting
    Lighting,
    TimeOfDay,
    ColorGrade,
    // Setting
    Setting,
    MicroLocation,
    Props,
    Weather,
    Background,
    // Person
    AgeGroup,
    Gender,
    Ethnicity,
    SkinTone,
    HairColor,
    HairStyle,
    BodyType,
    Wardrobe,
    Pose,
    Gaze,
    Expression,
    SkinRealism,
    Makeup,
    Accessories,
    // Product
    ProductPlacement,
    ProductInteraction,
    ProductScale,
    ProductSurface,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: &'static [Category] = &[
        Category::ContentStyle,
        Category::CompositionMode,
        Category::AspectRatio,
        Category::CreatorPreset,
        Category::Platform,
        Category::Mood,
        Category::ImageQuality,
        Category::CameraDevice,
        Category::CameraDistance,
        Category::CameraAngle,
        Category::CameraShot,
        Category::Lens,
        Category::DepthOfField,
        Category::Lighting,
        Category::TimeOfDay,
        Category::ColorGrade,
        Category::Setting,
        Category::MicroLocation,
        Category::Props,
        Category::Weather,
        Category::Background,
        Category::AgeGroup,
        Category::Gender,
        Category::Ethnicity,
        Category::SkinTone,
        Category::HairColor,
        Category::HairStyle,
        Category::BodyType,
        Category::Wardrobe,
        Category::Pose,
        Category::Gaze,
        Category::Expression,
        Category::SkinRealism,
        Category::Makeup,
        Category::Accessories,
        Category::ProductPlacement,
        Category::ProductInteraction,
        Category::ProductScale,
        Category::ProductSurface,
    ];

    /// Wire name of the category (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ContentStyle => "content_style",
            Category::CompositionMode => "composition_mode",
            Category::AspectRatio => "aspect_ratio",
            Category::CreatorPreset => "creator_preset",
            Category::Platform => "platform",
            Category::Mood => "mood",
            Category::ImageQuality => "image_quality",
            Category::CameraDevice => "camera_device",
            Category::CameraDistance => "camera_distance",
            Category::CameraAngle => "camera_angle",
            Category::CameraShot => "camera_shot",
            Category::Lens => "lens",
            Category::DepthOfField => "depth_of_field",
            Category::Lighting => "lighting",
            Category::TimeOfDay => "time_of_day",
            Category::ColorGrade => "color_grade",
            Category::Setting => "setting",
            Category::MicroLocation => "micro_location",
            Category::Props => "props",
            Category::Weather => "weather",
            Category::Background => "background",
            Category::AgeGroup => "age_group",
            Category::Gender => "gender",
            Category::Ethnicity => "ethnicity",
            Category::SkinTone => "skin_tone",
            Category::HairColor => "hair_color",
            Category::HairStyle => "hair_style",
            Category::BodyType => "body_type",
            Category::Wardrobe => "wardrobe",
            Category::Pose => "pose",
            Category::Gaze => "gaze",
            Category::Expression => "expression",
            Category::SkinRealism => "skin_realism",
            Category::Makeup => "makeup",
            Category::Accessories => "accessories",
            Category::ProductPlacement => "product_placement",
            Category::ProductInteraction => "product_interaction",
            Category::ProductScale => "product_scale",
            Category::ProductSurface => "product_surface",
        }
    }

    /// UI grouping of the category.
    pub fn group(self) -> &'static str {
        use Category::*;
        match self {
            ContentStyle | CompositionMode | AspectRatio | CreatorPreset | Platform | Mood
            | ImageQuality => "style",
            CameraDevice | CameraDistance | CameraAngle | CameraShot | Lens | DepthOfField => {
                "camera"
            }
            Lighting | TimeOfDay | ColorGrade => "lighting",
            Setting | MicroLocation | Props | Weather | Background => "setting",
            AgeGroup | Gender | Ethnicity | SkinTone | HairColor | HairStyle | BodyType
            | Wardrobe | Pose | Gaze | Expression | SkinRealism | Makeup | Accessories => "person",
            ProductPlacement | ProductInteraction | ProductScale | ProductSurface => "product",
        }
    }

    /// The ordered option list for this category.
    pub fn options(self) -> &'static [CatalogOption] {
        match self {
            Category::ContentStyle => CONTENT_STYLE,
            Category::CompositionMode => COMPOSITION_MODE,
            Category::AspectRatio => ASPECT_RATIO,
            Category::CreatorPreset => CREATOR_PRESET,
            Category::Platform => PLATFORM,
            Category::Mood => MOOD,
            Category::ImageQuality => IMAGE_QUALITY,
            Category::CameraDevice => CAMERA_DEVICE,
            Category::CameraDistance => CAMERA_DISTANCE,
            Category::CameraAngle => CAMERA_ANGLE,
            Category::CameraShot => CAMERA_SHOT,
            Category::Lens => LENS,
            Category::DepthOfField => DEPTH_OF_FIELD,
            Category::Lighting => LIGHTING,
            Category::TimeOfDay => TIME_OF_DAY,
            Category::ColorGrade => COLOR_GRADE,
            Category::Setting => SETTING,
            Category::MicroLocation => MICRO_LOCATION,
            Category::Props => PROPS,
            Category::Weather => WEATHER,
            Category::Background => BACKGROUND,
            Category::AgeGroup => AGE_GROUP,
            Category::Gender => GENDER,
            Category::Ethnicity => ETHNICITY,
            Category::SkinTone => SKIN_TONE,
            Category::HairColor => HAIR_COLOR,
            Category::HairStyle => HAIR_STYLE,
            Category::BodyType => BODY_TYPE,
            Category::Wardrobe => WARDROBE,
            Category::Pose => POSE,
            Category::Gaze => GAZE,
            Category::Expression => EXPRESSION,
            Category::SkinRealism => SKIN_REALISM,
            Category::Makeup => MAKEUP,
            Category::Accessories => ACCESSORIES,
            Category::ProductPlacement => PRODUCT_PLACEMENT,
            Category::ProductInteraction => PRODUCT_INTERACTION,
            Category::ProductScale => PRODUCT_SCALE,
            Category::ProductSurface => PRODUCT_SURFACE,
        }
    }

    /// Default value: the first option of the catalog.
    pub fn default_value(self) -> &'static str {
        self.options()[0].value
    }

    /// Exact lookup of a stored value.
    pub fn find(self, value: &str) -> Option<&'static CatalogOption> {
        self.options().iter().find(|o| o.value == value)
    }

    /// Lenient lookup used to classify free text: matches an option value or
    /// label, ignoring case and surrounding whitespace.
    pub fn find_loose(self, text: &str) -> Option<&'static CatalogOption> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.options()
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(text) || o.label.eq_ignore_ascii_case(text))
    }

    /// Whether `value` is one of this category's catalog values.
    pub fn contains(self, value: &str) -> bool {
        self.find(value).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// One selectable entry of a category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    /// Stored value.
    pub value: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Prompt fragment emitted for this option (may be empty).
    #[serde(skip)]
    pub phrase: &'static str,
}

const fn opt(value: &'static str, label: &'static str, phrase: &'static str) -> CatalogOption {
    CatalogOption {
        value,
        label,
        phrase,
    }
}

/* --------------------------------------------------------------------------
   Style
   -------------------------------------------------------------------------- */

static CONTENT_STYLE: &[CatalogOption] = &[
    opt("ugc", "UGC", "authentic user-generated content"),
    opt(CONTENT_STYLE_PRODUCT, "Product only", "clean product-only"),
    opt("lifestyle", "Lifestyle", "natural lifestyle"),
    opt("studio", "Studio", "polished studio"),
    opt("editorial", "Editorial", "high-end editorial"),
];

static COMPOSITION_MODE: &[CatalogOption] = &[
    opt(
        "balanced",
        "Balanced",
        "Balance the frame evenly between the person and the product.",
    ),
    opt(
        "product_first",
        "Product first",
        "Make the product the dominant focal point, with the person supporting it.",
    ),
    opt(
        "model_first",
        "Model first",
        "Make the person the primary focal point, with the product clearly visible but secondary.",
    ),
    opt(
        "fifty_fifty",
        "50/50",
        "Split the frame fifty-fifty between the person and the product.",
    ),
];

static ASPECT_RATIO: &[CatalogOption] = &[
    opt("4:5", "Portrait 4:5", "4:5 portrait"),
    opt("1:1", "Square 1:1", "1:1 square"),
    opt("9:16", "Vertical 9:16", "9:16 vertical"),
    opt("16:9", "Landscape 16:9", "16:9 landscape"),
    opt("3:4", "Portrait 3:4", "3:4 portrait"),
];

static CREATOR_PRESET: &[CatalogOption] = &[
    opt("none", "None", ""),
    opt("everyday_creator", "Everyday creator", "a casual everyday creator aesthetic"),
    opt("beauty_creator", "Beauty creator", "a beauty creator aesthetic with clean vanity styling"),
    opt("fitness_creator", "Fitness creator", "an energetic fitness creator aesthetic"),
    opt("wellness_creator", "Wellness creator", "a calm wellness creator aesthetic"),
    opt("tech_reviewer", "Tech reviewer", "a crisp tech reviewer aesthetic"),
];

static PLATFORM: &[CatalogOption] = &[
    opt("instagram_feed", "Instagram feed", "an Instagram feed post"),
    opt("instagram_story", "Instagram story", "an Instagram story"),
    opt("tiktok", "TikTok", "a TikTok cover"),
    opt("amazon_listing", "Amazon listing", "a marketplace product listing"),
    opt("website_hero", "Website hero", "a website hero banner"),
];

static MOOD: &[CatalogOption] = &[
    opt("bright_airy", "Bright & airy", "bright and airy"),
    opt("warm_cozy", "Warm & cozy", "warm and cozy"),
    opt("calm_minimal", "Calm & minimal", "calm and minimal"),
    opt("energetic", "Energetic", "energetic and upbeat"),
    opt("moody", "Moody", "moody and atmospheric"),
];

static IMAGE_QUALITY: &[CatalogOption] = &[
    opt("photorealistic", "Photorealistic", "an ultra-realistic photograph with natural detail"),
    opt("high_detail", "High detail", "a crisp, high-detail commercial photograph"),
    opt("natural_phone", "Natural phone", "a natural smartphone-quality photo"),
];

/* --------------------------------------------------------------------------
   Camera
   -------------------------------------------------------------------------- */

static CAMERA_DEVICE: &[CatalogOption] = &[
    opt("iphone", "iPhone", "shot on a recent iPhone"),
    opt("dslr", "DSLR", "shot on a full-frame DSLR"),
    opt("mirrorless", "Mirrorless", "shot on a mirrorless camera"),
    opt("film_35mm", "35mm film", "shot on 35mm film"),
];

static CAMERA_DISTANCE: &[CatalogOption] = &[
    opt("medium", "Medium", "from a medium distance"),
    opt("close", "Close", "from close range"),
    opt("extreme_close", "Extreme close", "from extreme close range"),
    opt("wide", "Wide", "from a wide distance"),
];

static CAMERA_ANGLE: &[CatalogOption] = &[
    opt("eye_level", "Eye level", "at eye level"),
    opt("high_angle", "High angle", "from a slightly high angle"),
    opt("low_angle", "Low angle", "from a low angle"),
    opt("overhead", "Overhead", "from directly overhead"),
    opt("dutch", "Dutch tilt", "with a subtle dutch tilt"),
];

static CAMERA_SHOT: &[CatalogOption] = &[
    opt("half_body", "Half body", "half-body shot"),
    opt("close_up", "Close-up", "close-up shot"),
    opt("full_body", "Full body", "full-body shot"),
    opt("detail", "Detail", "detail shot"),
    opt("over_the_shoulder", "Over the shoulder", "over-the-shoulder shot"),
];

static LENS: &[CatalogOption] = &[
    opt("50mm", "50mm", "a 50mm lens"),
    opt("35mm", "35mm", "a 35mm lens"),
    opt("85mm", "85mm", "an 85mm portrait lens"),
    opt("24mm", "24mm", "a 24mm wide lens"),
    opt("macro", "Macro", "a macro lens"),
];

static DEPTH_OF_FIELD: &[CatalogOption] = &[
    opt("shallow", "Shallow", "shallow depth of field with soft background blur"),
    opt("moderate", "Moderate", "moderate depth of field"),
    opt("deep", "Deep", "deep focus with everything sharp"),
];

/* --------------------------------------------------------------------------
   Lighting
   -------------------------------------------------------------------------- */

static LIGHTING: &[CatalogOption] = &[
    opt("natural_window", "Natural window", "soft natural window light"),
    opt("golden_hour", "Golden hour", "warm golden-hour sunlight"),
    opt("studio_softbox", "Studio softbox", "even studio softbox lighting"),
    opt("ring_light", "Ring light", "a flattering front ring light"),
    opt("overcast", "Overcast", "soft overcast daylight"),
    opt("neon", "Neon", "colorful neon accent lighting"),
];

static TIME_OF_DAY: &[CatalogOption] = &[
    opt("morning", "Morning", "in the morning"),
    opt("midday", "Midday", "at midday"),
    opt("afternoon", "Afternoon", "in the afternoon"),
    opt("evening", "Evening", "in the evening"),
    opt("night", "Night", "at night"),
];

static COLOR_GRADE: &[CatalogOption] = &[
    opt("neutral", "Neutral", "neutral true-to-life colors"),
    opt("warm", "Warm", "a warm color grade"),
    opt("cool", "Cool", "a cool color grade"),
    opt("muted", "Muted", "a muted film-like palette"),
    opt("vibrant", "Vibrant", "vibrant saturated colors"),
];

/* --------------------------------------------------------------------------
   Setting
   -------------------------------------------------------------------------- */

static SETTING: &[CatalogOption] = &[
    opt("living_room", "Living room", "a bright living room"),
    opt("home_bathroom", "Bathroom", "a clean home bathroom"),
    opt("kitchen", "Kitchen", "a modern home kitchen"),
    opt("bedroom", "Bedroom", "a cozy bedroom"),
    opt("gym", "Gym", "a well-lit gym"),
    opt("home_office", "Home office", "a tidy home office"),
    opt("outdoor_park", "Park", "an outdoor park"),
    opt("cafe", "Cafe", "a relaxed cafe"),
    opt("studio_backdrop", "Studio backdrop", "a seamless studio backdrop"),
];

static MICRO_LOCATION: &[CatalogOption] = &[
    opt("none", "None", ""),
    opt("vanity_counter", "Vanity counter", "on a bathroom vanity counter"),
    opt("kitchen_island", "Kitchen island", "at the kitchen island"),
    opt("bedside_table", "Bedside table", "beside the bedside table"),
    opt("desk", "Desk", "at a desk"),
    opt("window_seat", "Window seat", "on a window seat"),
    opt("gym_bench", "Gym bench", "on a gym bench"),
    opt(CUSTOM_VALUE, "Custom", ""),
];

static PROPS: &[CatalogOption] = &[
    opt("none", "None", ""),
    opt("plants", "Plants", "a few green plants"),
    opt("skincare_shelf", "Skincare shelf", "a shelf of neutral unbranded skincare bottles"),
    opt("coffee_mug", "Coffee mug", "a ceramic coffee mug"),
    opt("towels", "Towels", "neatly folded towels"),
    opt("books", "Books", "a small stack of books"),
    opt("water_bottle", "Water bottle", "a reusable water bottle"),
    opt(CUSTOM_VALUE, "Custom", ""),
];

static WEATHER: &[CatalogOption] = &[
    opt("none", "None", ""),
    opt("sunny", "Sunny", "sunny weather"),
    opt("cloudy", "Cloudy", "a cloudy sky"),
    opt("rainy", "Rainy", "rain visible outside"),
    opt("snowy", "Snowy", "snow visible outside"),
];

static BACKGROUND: &[CatalogOption] = &[
    opt("auto", "Auto", ""),
    opt("clean_minimal", "Clean minimal", "a clean, minimal background"),
    opt("lived_in", "Lived-in", "a lived-in background with subtle everyday clutter"),
    opt("blurred", "Blurred", "a softly blurred background"),
    opt("solid_color", "Solid color", "a solid color backdrop"),
];

/* --------------------------------------------------------------------------
   Person
   -------------------------------------------------------------------------- */

static AGE_GROUP: &[CatalogOption] = &[
    opt("18-25", "18-25", "young adult in their early twenties"),
    opt("26-35", "26-35", "adult in their late twenties to early thirties"),
    opt("36-45", "36-45", "adult in their late thirties to early forties"),
    opt("46-60", "46-60", "mature adult in their fifties"),
    opt("60_plus", "60+", "senior adult over sixty"),
    opt(AGE_GROUP_NO_PERSON, "No person", ""),
];

static GENDER: &[CatalogOption] = &[
    opt("female", "Female", "woman"),
    opt("male", "Male", "man"),
    opt("non_binary", "Non-binary", "person"),
];

static ETHNICITY: &[CatalogOption] = &[
    opt("any", "Any", ""),
    opt("east_asian", "East Asian", "East Asian"),
    opt("south_asian", "South Asian", "South Asian"),
    opt("black", "Black", "Black"),
    opt("white", "White", "white"),
    opt("latino", "Latino", "Latino"),
    opt("middle_eastern", "Middle Eastern", "Middle Eastern"),
    opt("mixed", "Mixed", "mixed-heritage"),
];

static SKIN_TONE: &[CatalogOption] = &[
    opt("medium", "Medium", "medium"),
    opt("fair", "Fair", "fair"),
    opt("light", "Light", "light"),
    opt("olive", "Olive", "olive"),
    opt("tan", "Tan", "tan"),
    opt("deep", "Deep", "deep"),
];

static HAIR_COLOR: &[CatalogOption] = &[
    opt("brown", "Brown", "brown"),
    opt("black", "Black", "black"),
    opt("blonde", "Blonde", "blonde"),
    opt("red", "Red", "red"),
    opt("gray", "Gray", "gray"),
];

static HAIR_STYLE: &[CatalogOption] = &[
    opt("wavy", "Wavy", "shoulder-length wavy"),
    opt("long_straight", "Long straight", "long straight"),
    opt("curly", "Curly", "curly"),
    opt("short", "Short", "short"),
    opt("bun", "Bun", "tied-back"),
    opt("braids", "Braids", "braided"),
];

static BODY_TYPE: &[CatalogOption] = &[
    opt("average", "Average", "average"),
    opt("slim", "Slim", "slim"),
    opt("athletic", "Athletic", "athletic"),
    opt("curvy", "Curvy", "curvy"),
    opt("plus_size", "Plus size", "plus-size"),
];

static WARDROBE: &[CatalogOption] = &[
    opt("casual", "Casual", "a casual t-shirt and jeans"),
    opt("loungewear", "Loungewear", "soft matching loungewear"),
    opt("activewear", "Activewear", "fitted activewear"),
    opt("business", "Business", "smart business attire"),
    opt("robe", "Robe", "a plush bathrobe"),
    opt("summer_dress", "Summer dress", "a light summer dress"),
];

static POSE: &[CatalogOption] = &[
    opt("natural_standing", "Natural standing", "standing naturally and relaxed"),
    opt("sitting", "Sitting", "sitting comfortably"),
    opt("walking", "Walking", "walking mid-stride"),
    opt("leaning", "Leaning", "leaning casually against a surface"),
    opt("mirror_selfie", "Mirror selfie", "taking a mirror selfie"),
    opt("holding_up", "Holding up", "holding the product up toward the camera"),
    opt("over_shoulder", "Over shoulder", "glancing back over one shoulder"),
    opt("pointing", "Pointing", "pointing toward the product"),
    opt("seated_showcase", "Seated showcase", "seated at a table presenting the product"),
];

static GAZE: &[CatalogOption] = &[
    opt("at_camera", "At camera", "looking directly into the camera"),
    opt("at_product", "At product", "looking at the product"),
    opt("off_camera", "Off camera", "looking softly off camera"),
    opt("down", "Down", "looking down"),
];

static EXPRESSION: &[CatalogOption] = &[
    opt("soft_smile", "Soft smile", "a soft, genuine smile"),
    opt("big_smile", "Big smile", "a big laughing smile"),
    opt("neutral", "Neutral", "a calm, neutral expression"),
    opt("confident", "Confident", "a confident expression"),
    opt("surprised", "Surprised", "a delighted, surprised expression"),
];

static SKIN_REALISM: &[CatalogOption] = &[
    opt("natural_texture", "Natural texture", "natural skin texture with visible pores"),
    opt("light_retouch", "Light retouch", "lightly retouched skin that keeps its texture"),
    opt("raw", "Raw", "completely unretouched skin with natural imperfections"),
    opt("glowing", "Glowing", "dewy, glowing skin"),
];

static MAKEUP: &[CatalogOption] = &[
    opt("natural", "Natural", "natural minimal makeup"),
    opt("none", "None", "no makeup"),
    opt("glam", "Glam", "full glam makeup"),
    opt("bold_lip", "Bold lip", "a bold lip"),
];

static ACCESSORIES: &[CatalogOption] = &[
    opt("none", "None", ""),
    opt("minimal_jewelry", "Minimal jewelry", "minimal gold jewelry"),
    opt("glasses", "Glasses", "glasses"),
    opt("watch", "Watch", "a wristwatch"),
    opt("headphones", "Headphones", "over-ear headphones"),
];

/* --------------------------------------------------------------------------
   Product
   -------------------------------------------------------------------------- */

static PRODUCT_PLACEMENT: &[CatalogOption] = &[
    opt("in_hand", "In hand", "held naturally in hand"),
    opt("on_surface", "On surface", "resting on a nearby surface"),
    opt("centered", "Centered", "centered in the frame"),
    opt("foreground", "Foreground", "in the foreground, closest to the camera"),
    opt("floating", "Floating", "floating slightly above the surface"),
];

static PRODUCT_INTERACTION: &[CatalogOption] = &[
    opt("holding", "Holding", "holding the product"),
    opt("applying", "Applying", "applying the product"),
    opt("using", "Using", "using the product"),
    opt("showing_label", "Showing label", "showing the product label to the camera"),
    opt("none", "None", ""),
];

static PRODUCT_SCALE: &[CatalogOption] = &[
    opt("true_to_life", "True to life", "true-to-life scale"),
    opt("slightly_enlarged", "Slightly enlarged", "slightly enlarged scale for emphasis"),
    opt("hero_large", "Hero large", "large hero scale"),
];

static PRODUCT_SURFACE: &[CatalogOption] = &[
    opt("auto", "Auto", ""),
    opt("marble", "Marble", "a marble surface"),
    opt("wood", "Wood", "a natural wood surface"),
    opt("linen", "Linen", "soft linen fabric"),
    opt("acrylic", "Acrylic riser", "a clear acrylic riser"),
    opt("stone", "Stone", "a rough stone slab"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
