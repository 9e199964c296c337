//! 리뷰 서비스의 프로젝트 → 저장소 그룹 → 저장소 계층.

#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    pub groups: Vec<RepoGroup>,
}

#[derive(Debug, Clone, Default)]
pub struct RepoGroup {
    pub name: String,
    pub repos: Vec<Repo>,
}

#[derive(Debug, Clone)]
pub struct Repo {
    pub id: u64,
    pub project_slug: String,
    pub group_slug: String,
    pub slug: String,
}

impl Repo {
    /// `<prefix>/code/<project>/<group>/<repo>` 형태의 정규 URL.
    pub fn canonical_url(&self, prefix: &str) -> String {
        format!(
            "{}/code/{}/{}/{}",
            prefix.trim_end_matches('/'),
            self.project_slug,
            self.group_slug,
            self.slug
        )
    }
}

/// 계층을 평탄화해 모든 저장소를 순회한다.
pub fn all_repos(projects: &[Project]) -> impl Iterator<Item = &Repo> {
    projects
        .iter()
        .flat_map(|p| p.groups.iter())
        .flat_map(|g| g.repos.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, slug: &str) -> Repo {
        Repo {
            id,
            project_slug: "Website".to_string(),
            group_slug: "Group".to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn canonical_url_ignores_trailing_slash_on_prefix() {
        let r = repo(3, "stable");
        assert_eq!(
            r.canonical_url("https://ka.kilnhg.com/"),
            "https://ka.kilnhg.com/code/Website/Group/stable"
        );
        assert_eq!(
            r.canonical_url("https://ka.kilnhg.com"),
            "https://ka.kilnhg.com/code/Website/Group/stable"
        );
    }

    #[test]
    fn all_repos_walks_every_group() {
        let projects = vec![
            Project {
                name: "a".into(),
                groups: vec![
                    RepoGroup {
                        name: "g1".into(),
                        repos: vec![repo(1, "one")],
                    },
                    RepoGroup {
                        name: "g2".into(),
                        repos: vec![repo(2, "two"), repo(3, "three")],
                    },
                ],
            },
            Project::default(),
        ];
        let ids: Vec<u64> = all_repos(&projects).map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
