//! Device type identifiers understood by the push server

/// Device/variant type identifier constants.
///
/// These are the values the server reports in a variant's `type` field and
/// accepts in an installation's `deviceType` field.
pub mod device_types {
    /// Android via Firebase Cloud Messaging.
    pub const ANDROID: &str = "android";
    /// Apple iOS via APNs.
    pub const IOS: &str = "ios";
    /// Mozilla SimplePush.
    pub const SIMPLE_PUSH: &str = "simplePush";
    /// Windows via WNS.
    pub const WINDOWS_WNS: &str = "windows_wns";
    /// Windows via MPNS.
    pub const WINDOWS_MPNS: &str = "windows_mpns";
    /// Amazon Device Messaging.
    pub const ADM: &str = "adm";
}
