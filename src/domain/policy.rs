//! 도메인 정책(리뷰어 매칭, 대상 별칭 해석, 저장소 역조회, 설명 편집 규칙).

use std::collections::{BTreeSet, HashMap};

use crate::domain::repository::{Project, all_repos};
use crate::domain::review::Person;

/// 에디터 버퍼에서 제거되는 안내 줄 접두사.
pub const EDITOR_COMMENT_PREFIX: &str = "HG:";

/// `["tom", "dick, Harry"]` → `{"dick", "harry", "tom"}`.
/// 쉼표로 나누고 trim/소문자화한 뒤 빈 값은 버린다.
pub fn normalize_reviewer_tokens(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 이름 또는 이메일에 토큰이 부분 문자열로 들어 있는 모든 사람.
/// 단어 경계가 아닌 substring 매칭이므로 모호성은 호출자가 처리한다.
pub fn match_candidates<'a>(token: &str, people: &'a [Person]) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|p| p.name.to_lowercase().contains(token) || p.email.to_lowercase().contains(token))
        .collect()
}

/// push 대상 URL을 고른다. 명시 대상 > `default-push` > `default`.
/// 별칭 이름은 대소문자를 무시하고, URL은 원문 그대로 돌려준다.
/// 같은 이름이 여러 번 나오면 뒤의 항목이 이긴다.
pub fn resolve_destination(aliases: &[(String, String)], explicit: Option<&str>) -> Option<String> {
    let paths: HashMap<String, String> = aliases
        .iter()
        .map(|(name, url)| (name.to_lowercase(), url.clone()))
        .collect();

    if let Some(dest) = explicit {
        return paths.get(&dest.to_lowercase()).cloned();
    }

    paths
        .get("default-push")
        .or_else(|| paths.get("default"))
        .cloned()
}

/// 계층 안에서 정규 URL이 `url`과 같은(대소문자 무시) 첫 저장소의 id.
pub fn find_repo_id(projects: &[Project], prefix: &str, url: &str) -> Option<u64> {
    let wanted = url.to_lowercase();
    all_repos(projects)
        .find(|repo| repo.canonical_url(prefix).to_lowercase() == wanted)
        .map(|repo| repo.id)
}

pub fn review_url(prefix: &str, review_id: u64) -> String {
    format!("{}/Review/{}", prefix.trim_end_matches('/'), review_id)
}

/// 에디터 초기 문구: `--rcomment`가 있으면 그것, 없으면 체인지셋 설명을 줄바꿈으로 잇는다.
pub fn default_description(comment: Option<&str>, changeset_descriptions: &[String]) -> String {
    match comment {
        Some(text) => text.to_string(),
        None => changeset_descriptions.join("\n"),
    }
}

/// 에디터에 띄울 전체 버퍼.
pub fn editor_buffer(initial: &str, user: &str) -> String {
    let mut out = String::new();
    out.push_str(initial);
    if !initial.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(EDITOR_COMMENT_PREFIX);
    out.push_str(" Enter the code review description. Lines beginning with 'HG:' are removed.\n");
    out.push_str(&format!("{EDITOR_COMMENT_PREFIX} user: {user}\n"));
    out
}

/// `HG:` 줄을 걷어내고 끝 공백을 정리한 설명 본문.
pub fn strip_editor_comments(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| !line.starts_with(EDITOR_COMMENT_PREFIX))
        .collect();
    kept.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::{Repo, RepoGroup};

    fn person(name: &str, email: &str, id: u64) -> Person {
        Person {
            name: name.to_string(),
            email: email.to_string(),
            id,
        }
    }

    #[test]
    fn tokens_split_trim_lowercase_and_dedupe() {
        let raw = vec![
            "Tom".to_string(),
            " dick , HARRY,".to_string(),
            "tom".to_string(),
        ];
        let tokens: Vec<String> = normalize_reviewer_tokens(&raw).into_iter().collect();
        assert_eq!(tokens, vec!["dick", "harry", "tom"]);
    }

    #[test]
    fn candidates_match_name_or_email_substring() {
        let people = vec![
            person("Tom Anderson", "ta@x.com", 1),
            person("Atom Smith", "asmith@x.com", 2),
            person("Jane Doe", "tomcat@x.com", 3),
            person("Bob", "bob@x.com", 4),
        ];
        let ids: Vec<u64> = match_candidates("tom", &people).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(match_candidates("zed", &people).is_empty());
        assert_eq!(match_candidates("bob@", &people).len(), 1);
    }

    #[test]
    fn destination_prefers_explicit_then_default_push_then_default() {
        let aliases = vec![
            ("default".to_string(), "https://K/code/A/B/Default".to_string()),
            ("Default-Push".to_string(), "https://k/code/a/b/push".to_string()),
            ("Stable".to_string(), "https://k/code/a/b/stable".to_string()),
        ];
        assert_eq!(
            resolve_destination(&aliases, Some("STABLE")).as_deref(),
            Some("https://k/code/a/b/stable")
        );
        assert_eq!(resolve_destination(&aliases, Some("nope")), None);
        assert_eq!(
            resolve_destination(&aliases, None).as_deref(),
            Some("https://k/code/a/b/push")
        );

        let only_default = vec![aliases[0].clone()];
        assert_eq!(
            resolve_destination(&only_default, None).as_deref(),
            Some("https://K/code/A/B/Default")
        );
        assert_eq!(resolve_destination(&[], None), None);

        let overridden = vec![
            ("default".to_string(), "https://k/code/a/b/stable".to_string()),
            ("DEFAULT".to_string(), "https://k/code/a/b/webapp".to_string()),
        ];
        assert_eq!(
            resolve_destination(&overridden, None).as_deref(),
            Some("https://k/code/a/b/webapp")
        );
    }

    #[test]
    fn repo_lookup_is_case_insensitive_identity() {
        let prefix = "https://ka.kilnhg.com";
        let projects = vec![Project {
            name: "Website".into(),
            groups: vec![RepoGroup {
                name: "Group".into(),
                repos: vec![
                    Repo {
                        id: 10,
                        project_slug: "Website".into(),
                        group_slug: "Group".into(),
                        slug: "stable".into(),
                    },
                    Repo {
                        id: 11,
                        project_slug: "Website".into(),
                        group_slug: "Group".into(),
                        slug: "Webapp".into(),
                    },
                ],
            }],
        }];

        for repo in all_repos(&projects) {
            let url = repo.canonical_url(prefix);
            assert_eq!(find_repo_id(&projects, prefix, &url), Some(repo.id));
            assert_eq!(
                find_repo_id(&projects, prefix, &url.to_uppercase()),
                Some(repo.id)
            );
        }
        assert_eq!(
            find_repo_id(&projects, prefix, "https://ka.kilnhg.com/code/website/group/missing"),
            None
        );
    }

    #[test]
    fn editor_text_round_trip_strips_comment_lines() {
        let initial = default_description(None, &["first".to_string(), "second".to_string()]);
        assert_eq!(initial, "first\nsecond");

        let buffer = editor_buffer(&initial, "me@x.com");
        assert!(buffer.contains("HG: user: me@x.com"));
        assert_eq!(strip_editor_comments(&buffer), "first\nsecond");

        assert_eq!(default_description(Some("given"), &["ignored".to_string()]), "given");
    }

    #[test]
    fn review_url_joins_prefix() {
        assert_eq!(review_url("https://k.kilnhg.com/", 42), "https://k.kilnhg.com/Review/42");
    }
}
