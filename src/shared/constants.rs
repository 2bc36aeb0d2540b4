// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Commuter role - submits pothole reports and tracks their progress
pub const ROLE_COMMUTER: &str = "commuter";

/// Municipality role - self-assigns reported potholes and marks them repaired
pub const ROLE_MUNICIPALITY: &str = "municipality";

/// Admin role - manages municipality staff accounts
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// REPORT CONSTANTS
// =============================================================================

/// Upper bound for a decoded report image
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Smallest body limit for the upload route: a base64 image of `MAX_IMAGE_BYTES`
/// plus room for the data URL prefix and the other fields
pub const MIN_UPLOAD_BODY_BYTES: usize = MAX_IMAGE_BYTES.div_ceil(3) * 4 + 64 * 1024;
