//! Short-name expansion for refs.
//!
//! A short name such as `master` or `v1.0` is looked up against these full
//! names, first match wins, the same precedence `git rev-parse` applies:
//!
//! 1. `<name>`
//! 2. `refs/<name>`
//! 3. `refs/tags/<name>`
//! 4. `refs/heads/<name>`
//! 5. `refs/remotes/<name>`
//! 6. `refs/remotes/<name>/HEAD`

/// Name of the symbolic ref that designates the checked-out commit.
pub const HEAD: &str = "HEAD";

/// Full ref names a short name may stand for, in lookup order.
pub fn expand_short_name(name: &str) -> [String; 6] {
    [
        name.to_string(),
        format!("refs/{name}"),
        format!("refs/tags/{name}"),
        format!("refs/heads/{name}"),
        format!("refs/remotes/{name}"),
        format!("refs/remotes/{name}/HEAD"),
    ]
}

/// Full ref name of a local branch.
pub fn branch_ref(name: &str) -> String {
    format!("refs/heads/{name}")
}

/// Full ref name of a tag.
pub fn tag_ref(name: &str) -> String {
    format!("refs/tags/{name}")
}

/// Returns `true` when `name` designates HEAD, case-insensitively.
pub fn is_head_alias(name: &str) -> bool {
    name.eq_ignore_ascii_case(HEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_order() {
        let names = expand_short_name("master");
        assert_eq!(names[0], "master");
        assert_eq!(names[2], "refs/tags/master");
        assert_eq!(names[3], "refs/heads/master");
        assert_eq!(names[5], "refs/remotes/master/HEAD");
    }

    #[test]
    fn head_alias_ignores_case() {
        assert!(is_head_alias("HEAD"));
        assert!(is_head_alias("head"));
        assert!(is_head_alias("HeAd"));
        assert!(!is_head_alias("HEADS"));
    }

    #[test]
    fn full_names() {
        assert_eq!(branch_ref("test1"), "refs/heads/test1");
        assert_eq!(tag_ref("v1"), "refs/tags/v1");
    }
}
