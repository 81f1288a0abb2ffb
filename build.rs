fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // Create a placeholder page if the frontend folder is missing so that
    // rust-embed always has something to embed
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.exists() {
        eprintln!("Warning: frontend/ directory not found, creating placeholder.");
        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Proxy Credit Checker</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #1a1a2e; color: #eee; }
        .message { text-align: center; }
        code { background: #333; padding: 2px 8px; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="message">
        <h1>Proxy Credit Checker</h1>
        <p>API is running. Frontend not embedded.</p>
        <p>POST to <code>/api/check</code> or <code>/api/export</code>.</p>
    </div>
</body>
</html>"#,
        )
        .ok();
    }
}
