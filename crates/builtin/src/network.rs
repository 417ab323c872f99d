//! Network presets

use typeward_contract::combinators::regex;

preset! {
    /// Dotted host names ending in an alphabetic top-level label.
    pub fn hostname() = "Hostname",
        regex(r"(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}")
            .expect("Hostname pattern compiles");

    /// Dotted-quad IPv4 addresses.
    pub fn ipv4() = "IPv4",
        regex(r"((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)")
            .expect("IPv4 pattern compiles");
}
