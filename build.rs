#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();

    // The icon is optional: release builds ship it, source checkouts may not.
    if std::path::Path::new("res/rtimeclock.ico").exists() {
        res.set_icon("res/rtimeclock.ico");
    }

    res.set("FileDescription", "rTimeclock CLI")
        .set("ProductName", "rTimeclock")
        .set("OriginalFilename", "rtimeclock.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed Windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
