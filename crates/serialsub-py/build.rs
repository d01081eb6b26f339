fn main() {
    // Extension modules resolve libpython symbols at load time on macOS.
    pyo3_build_config::add_extension_module_link_args();
}
