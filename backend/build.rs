//! Stages the trunk output of `frontend` where `include_dir!` embeds it.

use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const EMBED_ROOT: &str = "static";

fn main() {
    println!("cargo:rerun-if-changed={FRONTEND_DIST}");

    let embed_root = Path::new(EMBED_ROOT);
    let frontend_dist = Path::new(FRONTEND_DIST);

    if frontend_dist.is_dir() {
        let _ = fs::remove_dir_all(embed_root);
        fs::create_dir_all(embed_root).unwrap();
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .copy_inside(true);
        fs_extra::dir::copy(frontend_dist, embed_root, &options).unwrap();
    }

    // Before the first trunk build the host compiles against an empty bundle.
    fs::create_dir_all(embed_root.join("dist")).unwrap();
}
