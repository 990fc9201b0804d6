// Rust's dead code analysis doesn't see uses from the bench files themselves.
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content that a writer might want rewritten.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted text\n> over two lines\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(size)
}

/// Alternating small insertions and deletions spread across `len` bytes.
#[allow(dead_code)]
pub fn typing_offsets(len: usize, count: usize) -> Vec<usize> {
    (0..count).map(|i| (i * 7919) % len.max(1)).collect()
}
