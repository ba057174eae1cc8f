fn main() {
    // Only the ESP-IDF build needs the sysenv link args; host tests build
    // without the optional embuild dependency.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
