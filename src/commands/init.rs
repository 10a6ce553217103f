//! Scaffold a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::helpers::fs::ensure_dir;
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory.
///
/// Lays out the conventional source tree with sample content for each
/// of the three content kinds, ready to build.
pub fn init_site(target_dir: &Path) -> Result<()> {
    ensure_dir(target_dir)?;
    ensure_dir(&target_dir.join("src/content/blog/posts"))?;
    ensure_dir(&target_dir.join("src/content/pages"))?;
    ensure_dir(&target_dir.join("src/assets/css"))?;
    ensure_dir(&target_dir.join("src/assets/js"))?;
    ensure_dir(&target_dir.join("src/assets/images"))?;
    ensure_dir(&target_dir.join("src/blog"))?;

    // Default site.yml
    let config_content = r#"# Site configuration

# Site
title: My Static Site

# Directory
source_dir: src
output_dir: dist
content_dir: content
posts_dir: blog/posts
pages_dir: pages
asset_dirs:
  - assets/css
  - assets/js
  - assets/images
copy_files:
  - index.html
  - blog/index.html

# Templates
template_file: template.html

# Build
clean_output: true
"#;

    fs::write(target_dir.join(CONFIG_FILE), config_content)?;

    // Site template for content outside the posts and pages subtrees
    let template_content = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}} | My Static Site</title>
    <link rel="stylesheet" href="/assets/css/styles.css">
</head>
<body>
    <main>
        <section class="page-content">
            <div class="container">
                <div class="markdown-content">
                    {{content}}
                </div>
            </div>
        </section>
    </main>

    <script src="/assets/js/main.js"></script>
</body>
</html>
"#;

    fs::write(target_dir.join("template.html"), template_content)?;

    // Hand-written home page, copied through as-is
    let index_content = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Home | My Static Site</title>
    <link rel="stylesheet" href="assets/css/styles.css">
</head>
<body>
    <header>
        <nav>
            <div class="logo">My Site</div>
            <ul class="nav-links">
                <li><a href="index.html">Home</a></li>
                <li><a href="blog/index.html">Blog</a></li>
                <li><a href="pages/about.html">About</a></li>
                <li><a href="pages/faq.html">FAQ</a></li>
                <li><a href="pages/contact.html">Contact</a></li>
            </ul>
        </nav>
    </header>

    <main>
        <section class="hero">
            <div class="container">
                <h1>Welcome to My Static Site</h1>
                <p>Markdown in, HTML out.</p>
            </div>
        </section>
    </main>

    <footer>
        <div class="container">
            <p>&copy; 2023 My Static Site. All rights reserved.</p>
        </div>
    </footer>

    <script src="assets/js/main.js"></script>
</body>
</html>
"#;

    fs::write(target_dir.join("src/index.html"), index_content)?;

    // Hand-written blog index, one level deep
    let blog_index_content = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Blog | My Static Site</title>
    <link rel="stylesheet" href="../assets/css/styles.css">
</head>
<body>
    <header>
        <nav>
            <div class="logo">My Site</div>
            <ul class="nav-links">
                <li><a href="../index.html">Home</a></li>
                <li><a href="index.html">Blog</a></li>
                <li><a href="../pages/about.html">About</a></li>
                <li><a href="../pages/faq.html">FAQ</a></li>
                <li><a href="../pages/contact.html">Contact</a></li>
            </ul>
        </nav>
    </header>

    <main>
        <section class="page-content">
            <div class="container">
                <h1>Blog</h1>
                <ul class="post-list">
                    <li><a href="posts/hello-world.html">Hello World</a></li>
                </ul>
            </div>
        </section>
    </main>

    <footer>
        <div class="container">
            <p>&copy; 2023 My Static Site. All rights reserved.</p>
        </div>
    </footer>

    <script src="../assets/js/main.js"></script>
</body>
</html>
"#;

    fs::write(target_dir.join("src/blog/index.html"), blog_index_content)?;

    // Base stylesheet
    let css_content = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    line-height: 1.6;
    color: #333;
}

.container {
    max-width: 800px;
    margin: 0 auto;
    padding: 0 1rem;
}

header nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background: #2c3e50;
}

.logo {
    color: #fff;
    font-weight: bold;
    font-size: 1.2rem;
}

.nav-links {
    display: flex;
    list-style: none;
    gap: 1.5rem;
}

.nav-links a {
    color: #ecf0f1;
    text-decoration: none;
}

.nav-links a.active {
    border-bottom: 2px solid #3498db;
}

.hero {
    padding: 4rem 0;
    text-align: center;
}

.page-content {
    padding: 2rem 0;
}

.markdown-content h1 {
    margin-bottom: 0.5rem;
}

.blog-date {
    color: #7f8c8d;
    font-size: 0.9rem;
}

.markdown-content p,
.markdown-content ul,
.markdown-content ol {
    margin: 1rem 0;
}

.post-list {
    list-style: none;
}

.post-list li {
    padding: 0.5rem 0;
}

footer {
    margin-top: 3rem;
    padding: 1.5rem 0;
    background: #2c3e50;
    color: #ecf0f1;
    text-align: center;
}

.success-message {
    color: #27ae60;
}

.error-message {
    color: #c0392b;
}
"#;

    fs::write(target_dir.join("src/assets/css/styles.css"), css_content)?;

    // Nav highlighting and contact form handling
    let js_content = r#"// Main JavaScript file

document.addEventListener('DOMContentLoaded', () => {
    // Set active nav link based on current page
    const currentPage = window.location.pathname;
    const navLinks = document.querySelectorAll('.nav-links a');

    navLinks.forEach(link => {
        const linkPath = link.getAttribute('href');
        if (currentPage.endsWith(linkPath)) {
            link.classList.add('active');
        } else if (currentPage.includes('/blog/') && linkPath.endsWith('blog/index.html')) {
            link.classList.add('active');
        }
    });

    // Handle contact form submission if it exists
    const contactForm = document.getElementById('contactForm');
    if (contactForm) {
        const formStatus = document.getElementById('formStatus');

        contactForm.addEventListener('submit', function (e) {
            e.preventDefault();

            const formData = new FormData(contactForm);
            const url = contactForm.getAttribute('action');

            fetch(url, {
                method: 'POST',
                body: formData,
                headers: {
                    'Accept': 'application/json'
                }
            })
                .then(response => response.json())
                .then(() => {
                    formStatus.innerHTML = '<p class="success-message">Thanks for your message! We\'ll get back to you soon.</p>';
                    contactForm.reset();
                })
                .catch(error => {
                    formStatus.innerHTML = '<p class="error-message">Oops! There was a problem sending your message. Please try again.</p>';
                    console.error(error);
                });
        });
    }
});
"#;

    fs::write(target_dir.join("src/assets/js/main.js"), js_content)?;

    // Sample post, stamped with today's date
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
---

Welcome to your new site. This is your first blog post.

## Quick Start

Write Markdown with a front-matter block at the top:

- **title** shows up in the page heading
- **date** appears in the byline

Build the site with:

```
mdsite build
```

New posts land in `src/content/blog/posts/`.
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(
        target_dir.join("src/content/blog/posts/hello-world.md"),
        sample_post,
    )?;

    // Sample pages
    let about_page = r#"---
title: About
---

# About

This site is generated from Markdown files by a small command-line
tool. Edit `src/content/pages/about.md` to make this page your own.
"#;

    let faq_page = r#"---
title: FAQ
---

# Frequently Asked Questions

## Where do posts live?

In `src/content/blog/posts`. Every Markdown file there becomes a blog
post.

## How do I add a page?

Drop a Markdown file into `src/content/pages` and rebuild.
"#;

    let contact_page = r#"---
title: Contact
---

# Contact

Send us a message and we will get back to you.

<form id="contactForm" action="https://example.com/api/contact" method="POST">
    <label for="name">Name</label>
    <input type="text" id="name" name="name" required>
    <label for="email">Email</label>
    <input type="email" id="email" name="email" required>
    <label for="message">Message</label>
    <textarea id="message" name="message" rows="5" required></textarea>
    <button type="submit">Send</button>
</form>

<div id="formStatus"></div>
"#;

    fs::write(target_dir.join("src/content/pages/about.md"), about_page)?;
    fs::write(target_dir.join("src/content/pages/faq.md"), faq_page)?;
    fs::write(target_dir.join("src/content/pages/contact.md"), contact_page)?;

    Ok(())
}
