//! Create a new post or page

use anyhow::{bail, Result};
use std::fs;

use crate::helpers::fs::ensure_dir;
use crate::Site;

/// Create a content file under the posts or pages subtree.
///
/// The file name comes from a slugified title; posts get a date stamp
/// in their front matter, pages only a title.
pub fn create(site: &Site, title: &str, kind: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    // Backslashes first, then quotes: the title sits in a double-quoted
    // YAML scalar where both are escape characters
    let safe_title = title.replace('\\', "\\\\").replace('"', "\\\"");

    let (dir, content) = match kind {
        "post" => (
            site.content_dir.join(&site.config.posts_dir),
            format!(
                "---\ntitle: \"{}\"\ndate: \"{}\"\n---\n\n",
                safe_title,
                now.format("%Y-%m-%d")
            ),
        ),
        "page" => (
            site.content_dir.join(&site.config.pages_dir),
            format!("---\ntitle: \"{}\"\n---\n\n", safe_title),
        ),
        other => bail!("Unknown kind: {} (expected post or page)", other),
    };

    let file_path = dir.join(format!("{}.md", slug));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    ensure_dir(&dir)?;
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use tempfile::tempdir;

    #[test]
    fn test_create_post_stamps_date() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        create(&site, "My First Post", "post").unwrap();

        let path = site
            .content_dir
            .join("blog/posts/my-first-post.md");
        let raw = fs::read_to_string(path).unwrap();
        let (fm, _) = FrontMatter::parse(&raw).unwrap();
        assert_eq!(fm.get_str("title"), Some("My First Post".to_string()));
        assert!(fm.get_str("date").is_some());
    }

    #[test]
    fn test_create_page_has_no_date() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        create(&site, "About", "page").unwrap();

        let raw = fs::read_to_string(site.content_dir.join("pages/about.md")).unwrap();
        let (fm, _) = FrontMatter::parse(&raw).unwrap();
        assert_eq!(fm.get_str("title"), Some("About".to_string()));
        assert_eq!(fm.get_str("date"), None);
    }

    #[test]
    fn test_title_with_quotes_stays_parseable() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        create(&site, "A \"Quoted\" Title", "post").unwrap();

        let raw =
            fs::read_to_string(site.content_dir.join("blog/posts/a-quoted-title.md")).unwrap();
        let (fm, _) = FrontMatter::parse(&raw).unwrap();
        assert_eq!(fm.get_str("title"), Some("A \"Quoted\" Title".to_string()));
    }

    #[test]
    fn test_title_with_backslashes_stays_parseable() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        // Unescaped, `\t` would parse as a tab and `\5` is rejected
        // outright as an unknown escape
        create(&site, r"50\50 to C:\temp", "post").unwrap();

        let raw =
            fs::read_to_string(site.content_dir.join("blog/posts/50-50-to-c-temp.md")).unwrap();
        let (fm, _) = FrontMatter::parse(&raw).unwrap();
        assert_eq!(fm.get_str("title"), Some(r"50\50 to C:\temp".to_string()));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        create(&site, "Once", "post").unwrap();
        assert!(create(&site, "Once", "post").is_err());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let tmp = tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        assert!(create(&site, "Whatever", "draft").is_err());
    }
}
