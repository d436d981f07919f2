//! Ready-made project trees.
//!
//! Each function builds its tree into an existing [`TestWorkspace`] so tests
//! can add to it afterwards.

use crate::TestWorkspace;

/// A small React app, with the clutter a real checkout carries:
/// `.git`, `node_modules` and a `dist` build.
pub fn react_app(ws: &TestWorkspace) {
    ws.tree(&[
        ".git/",
        ".gitignore",
        ".env",
        "node_modules/react/index.js",
        "dist/bundle.js",
        "package.json",
        "README.md",
        "src/App.jsx",
        "src/App.css",
        "src/index.js",
        "src/utils.js",
        "src/components/Button.jsx",
        "src/components/Header.jsx",
        "src/components/index.js",
        "src/hooks/useAuth.js",
        "src/pages/",
    ]);
}

/// A plain library folder whose base name is not canonical.
pub fn lib_folder(ws: &TestWorkspace) {
    ws.tree(&["lib/a.txt", "lib/b.txt", "lib/z.txt", "lib/docs/"]);
}
