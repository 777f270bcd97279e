//! Execution constants and output settings

// Propagation behavior
/// Intensity given to tiles created by rule propagation
pub const SPAWN_INTENSITY: i64 = 1;

// Script discovery
/// File extension recognized as a command script
pub const SCRIPT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix added to rendered plane filenames
pub const RENDER_SUFFIX: &str = "_plane";
/// Render destination when commands arrive on standard input
pub const DEFAULT_RENDER_PATH: &str = "plane.png";

// Progress bar display settings
/// Lines executed between progress bar updates
pub const REPORT_LINE_INTERVAL: usize = 64;

// Render appearance
/// Alpha floor so the faintest lit tiles stay visible
pub const RENDER_MIN_ALPHA: u8 = 48;
