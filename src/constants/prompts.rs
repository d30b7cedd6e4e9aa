pub const COMMENT_PROMPT: &str = r#"Improve the comments in this file.

Rewrite comments that are unclear, outdated, or redundant. Remove comments
that merely restate the code. Add comments only where the intent of the code
is genuinely hard to infer. Do NOT change any code - only comments may be
added, removed, or reworded. If the comments are already in good shape,
report that no change is required."#;

pub const DOCSTRING_PROMPT: &str = r#"Generate documentation comments for this file.

Add a documentation comment to every public function, method, type, and
module that lacks one, using the documentation conventions of the file's
language. Keep existing documentation unless it is factually wrong. Do NOT
change any executable code. If everything is already documented, report that
no change is required."#;

pub const CLEANUP_PROMPT: &str = r#"Clean up this file without changing its behavior.

Remove dead code, unused imports, and commented-out blocks. Normalize
inconsistent formatting and naming where the fix is unambiguous. Do NOT
restructure the program, rename public interfaces, or alter observable
behavior. If the file is already clean, report that no change is required."#;
