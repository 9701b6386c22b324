//! Queries composed from transport calls.
//!
//! The API addresses everything by numeric id, so most queries first resolve
//! a project by its `path` and then fetch the sub-resource. Named
//! sub-resources (milestones, releases, tags) are found by listing one page of
//! candidates and scanning it for an exact match.

use std::future::Future;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::client::{ClientConfig, Transport};
use crate::error::{Error, ResourceKind, Result, SwapStage};
use crate::logic::{
    Issue, IssueState, Label, MergeRequest, MergeRequestState, Milestone, Package, PackageFile,
    PackageInfo, Pipeline, Project, Release, Tag,
};
use crate::models;
use crate::utils::constants::DEFAULT_PAGE_SIZE;

/// Returns the first item satisfying `matches`, or a typed not-found error.
pub fn select<T>(
    items: Vec<T>,
    kind: ResourceKind,
    key: &str,
    matches: impl Fn(&T) -> bool,
) -> Result<T> {
    items
        .into_iter()
        .find(|item| matches(item))
        .ok_or_else(|| Error::not_found(kind, key))
}

pub struct GitlabService<T> {
    transport: T,
    page_size: u32,
}

impl<T: Transport> GitlabService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_config(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            page_size: config.page_size,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn per_page(&self, quantity: Option<u32>) -> u32 {
        quantity.filter(|n| *n > 0).unwrap_or(self.page_size)
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let body = self.transport.get(path).await?;
        serde_json::from_value(body).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn fetch_views<R, V>(&self, path: &str) -> Result<Vec<V>>
    where
        R: DeserializeOwned,
        V: From<R>,
    {
        let raw: Vec<R> = self.fetch(path).await?;
        Ok(raw.into_iter().map(V::from).collect())
    }

    async fn update<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let body = self.transport.put(path).await?;
        serde_json::from_value(body).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Resolves the project, lists its candidates and picks the exact match.
    async fn resolve_in_project<V, F, Fut>(
        &self,
        project_path: &str,
        kind: ResourceKind,
        key: &str,
        list: F,
        matches: impl Fn(&V) -> bool,
    ) -> Result<(Project, V)>
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = Result<Vec<V>>>,
    {
        let project = self.project_by_path(project_path).await?;
        let candidates = list(project.id()).await?;
        let found = select(candidates, kind, key, matches)?;
        Ok((project, found))
    }

    pub async fn projects(&self, quantity: Option<u32>, search: Option<&str>) -> Result<Vec<Project>> {
        let mut path = format!(
            "/projects?per_page={}&order_by=name&sort=asc&membership=true",
            self.per_page(quantity)
        );
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            path.push_str(&format!("&search={}", encode(search)));
        }
        self.fetch_views::<models::projects::Project, _>(&path).await
    }

    /// Finds the project whose `path` equals `project_path` exactly.
    pub async fn project_by_path(&self, project_path: &str) -> Result<Project> {
        let projects = self.projects(None, Some(project_path)).await?;
        let project = select(projects, ResourceKind::Project, project_path, |p| {
            p.path() == project_path
        })?;
        tracing::debug!(project = project_path, id = project.id(), "resolved project");
        Ok(project)
    }

    pub async fn all_issues(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Issue>> {
        let project = self.project_by_path(project_path).await?;
        let path = format!(
            "/projects/{}/issues?per_page={}&order_by=created_at",
            project.id(),
            self.per_page(quantity)
        );
        self.fetch_views::<models::issues::Issue, _>(&path).await
    }

    pub async fn issues_with_state(
        &self,
        project_path: &str,
        state: IssueState,
        quantity: Option<u32>,
    ) -> Result<Vec<Issue>> {
        let project = self.project_by_path(project_path).await?;
        let path = format!(
            "/projects/{}/issues?per_page={}&state={}&order_by=created_at",
            project.id(),
            self.per_page(quantity),
            state.as_str()
        );
        let issues: Vec<Issue> = self.fetch_views::<models::issues::Issue, _>(&path).await?;
        Ok(issues
            .into_iter()
            .filter(|i| i.state_kind() == Some(state))
            .collect())
    }

    pub async fn opened_issues(&self, project_path: &str) -> Result<Vec<Issue>> {
        self.issues_with_state(project_path, IssueState::Opened, None).await
    }

    async fn project_milestones(
        &self,
        project_id: u64,
        only_active: bool,
        quantity: Option<u32>,
    ) -> Result<Vec<Milestone>> {
        let path = format!(
            "/projects/{}/milestones?per_page={}",
            project_id,
            self.per_page(quantity)
        );
        let mut milestones: Vec<Milestone> =
            self.fetch_views::<models::milestones::Milestone, _>(&path).await?;
        if only_active {
            milestones.retain(Milestone::is_active);
        }
        milestones.sort_by(|a, b| b.id().cmp(&a.id()));
        Ok(milestones)
    }

    /// Milestones, highest id first.
    pub async fn milestones(
        &self,
        project_path: &str,
        only_active: bool,
        quantity: Option<u32>,
    ) -> Result<Vec<Milestone>> {
        let project = self.project_by_path(project_path).await?;
        self.project_milestones(project.id(), only_active, quantity).await
    }

    pub async fn milestone_by_title(&self, project_path: &str, title: &str) -> Result<(Project, Milestone)> {
        self.resolve_in_project(
            project_path,
            ResourceKind::Milestone,
            title,
            |id| self.project_milestones(id, false, None),
            |m: &Milestone| m.title() == title,
        )
        .await
    }

    /// Issues of one milestone, highest id first. The endpoint cannot sort.
    async fn issues_of_milestone(&self, project_id: u64, milestone_id: u64) -> Result<Vec<Issue>> {
        let path = format!(
            "/projects/{}/milestones/{}/issues?per_page={}",
            project_id,
            milestone_id,
            self.per_page(None)
        );
        let mut issues: Vec<Issue> = self.fetch_views::<models::issues::Issue, _>(&path).await?;
        issues.sort_by(|a, b| b.id().cmp(&a.id()));
        Ok(issues)
    }

    pub async fn milestone_issues(&self, project_path: &str, milestone_title: &str) -> Result<Vec<Issue>> {
        let (project, milestone) = self.milestone_by_title(project_path, milestone_title).await?;
        self.issues_of_milestone(project.id(), milestone.id()).await
    }

    async fn project_releases(&self, project_id: u64, quantity: Option<u32>) -> Result<Vec<Release>> {
        let path = format!(
            "/projects/{}/releases?per_page={}",
            project_id,
            self.per_page(quantity)
        );
        let mut releases: Vec<Release> =
            self.fetch_views::<models::releases::Release, _>(&path).await?;
        releases.sort_by(Release::chronological);
        Ok(releases)
    }

    /// Releases, oldest first.
    pub async fn releases(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Release>> {
        let project = self.project_by_path(project_path).await?;
        self.project_releases(project.id(), quantity).await
    }

    async fn resolve_release(&self, project_path: &str, name: &str) -> Result<(Project, Release)> {
        self.resolve_in_project(
            project_path,
            ResourceKind::Release,
            name,
            |id| self.project_releases(id, None),
            |r: &Release| r.name() == name,
        )
        .await
    }

    pub async fn release_by_name(&self, project_path: &str, name: &str) -> Result<Release> {
        let (_, release) = self.resolve_release(project_path, name).await?;
        Ok(release)
    }

    /// Issues of every milestone attached to the release.
    ///
    /// Milestone fetches run concurrently. Each milestone's issues keep their
    /// own order; callers must not rely on the order between milestones. Any
    /// failing fetch fails the whole query.
    pub async fn release_issues(&self, project_path: &str, release_name: &str) -> Result<Vec<Issue>> {
        let (project, release) = self.resolve_release(project_path, release_name).await?;
        let milestone_ids: Vec<u64> = release.milestones().iter().map(Milestone::id).collect();

        let groups = try_join_all(
            milestone_ids
                .into_iter()
                .map(|milestone_id| self.issues_of_milestone(project.id(), milestone_id)),
        )
        .await?;
        Ok(groups.into_iter().flatten().collect())
    }

    async fn project_tags(&self, project_id: u64, quantity: Option<u32>) -> Result<Vec<Tag>> {
        let path = format!(
            "/projects/{}/repository/tags?per_page={}",
            project_id,
            self.per_page(quantity)
        );
        let mut tags: Vec<Tag> = self.fetch_views::<models::tags::Tag, _>(&path).await?;
        tags.sort_by(Tag::newest_first);
        Ok(tags)
    }

    /// Tags, most recent commit first.
    pub async fn tags(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Tag>> {
        let project = self.project_by_path(project_path).await?;
        self.project_tags(project.id(), quantity).await
    }

    pub async fn tag_by_name(&self, project_path: &str, name: &str) -> Result<Tag> {
        let (_, tag) = self
            .resolve_in_project(
                project_path,
                ResourceKind::Tag,
                name,
                |id| self.project_tags(id, None),
                |t: &Tag| t.name() == name,
            )
            .await?;
        Ok(tag)
    }

    /// Pipelines, newest first as ordered by the server.
    pub async fn pipelines(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Pipeline>> {
        let project = self.project_by_path(project_path).await?;
        let path = format!(
            "/projects/{}/pipelines?per_page={}&order_by=id&sort=desc",
            project.id(),
            self.per_page(quantity)
        );
        self.fetch_views::<models::pipelines::Pipeline, _>(&path).await
    }

    /// Most recent successful pipeline that ran for `tag_name`.
    pub async fn successful_tag_pipeline(&self, project_path: &str, tag_name: &str) -> Result<Option<Pipeline>> {
        let pipelines = self.pipelines(project_path, None).await?;
        Ok(pipelines
            .into_iter()
            .find(|p| p.is_success() && p.ref_name() == tag_name))
    }

    pub async fn labels(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Label>> {
        let project = self.project_by_path(project_path).await?;
        let path = format!(
            "/projects/{}/labels?per_page={}",
            project.id(),
            self.per_page(quantity)
        );
        self.fetch_views::<models::labels::Label, _>(&path).await
    }

    pub async fn merge_requests(
        &self,
        project_path: &str,
        state: Option<MergeRequestState>,
        quantity: Option<u32>,
    ) -> Result<Vec<MergeRequest>> {
        let project = self.project_by_path(project_path).await?;
        let mut path = format!(
            "/projects/{}/merge_requests?per_page={}",
            project.id(),
            self.per_page(quantity)
        );
        if let Some(state) = state {
            path.push_str(&format!("&state={}", state.as_str()));
        }
        self.fetch_views::<models::merge_requests::MergeRequest, _>(&path).await
    }

    async fn package_files(&self, project: &Project, info: PackageInfo) -> Result<Package> {
        let path = format!(
            "/projects/{}/packages/{}/package_files?per_page={}",
            project.id(),
            info.id(),
            self.per_page(None)
        );
        let raw: Vec<models::packages::PackageFile> = self.fetch(&path).await?;
        let files = raw
            .into_iter()
            .map(|f| PackageFile::new(f, project.web_url()))
            .collect();
        Ok(Package::new(info, files))
    }

    /// Packages with their files; file listings are fetched concurrently.
    pub async fn packages(&self, project_path: &str, quantity: Option<u32>) -> Result<Vec<Package>> {
        let project = self.project_by_path(project_path).await?;
        let path = format!(
            "/projects/{}/packages?per_page={}",
            project.id(),
            self.per_page(quantity)
        );
        let infos: Vec<PackageInfo> =
            self.fetch_views::<models::packages::PackageInfo, _>(&path).await?;
        try_join_all(infos.into_iter().map(|info| self.package_files(&project, info))).await
    }

    /// Replaces `remove` with `add` on one issue: two PUTs, not atomic.
    ///
    /// The add step only runs once the remove step has been confirmed by the
    /// returned issue. Either failure is reported as a `PartialMutation`
    /// naming the stage; the remote is left as the failing step found it.
    pub async fn swap_issue_label(
        &self,
        project_path: &str,
        issue_iid: u64,
        remove: &str,
        add: &str,
    ) -> Result<Issue> {
        let project = self.project_by_path(project_path).await?;
        let base = format!("/projects/{}/issues/{}", project.id(), issue_iid);

        let stage_failed = |stage, cause: Option<Error>| Error::PartialMutation {
            stage,
            iid: issue_iid,
            cause: cause.map(Box::new),
        };

        let removed = self
            .update::<models::issues::Issue>(&format!("{base}?remove_labels={}", encode(remove)))
            .await
            .map(Issue::from)
            .map_err(|e| stage_failed(SwapStage::Remove, Some(e)))?;
        if removed.has_label(remove) {
            return Err(stage_failed(SwapStage::Remove, None));
        }

        let added = self
            .update::<models::issues::Issue>(&format!("{base}?add_labels={}", encode(add)))
            .await
            .map(Issue::from)
            .map_err(|e| stage_failed(SwapStage::Add, Some(e)))?;
        if !added.has_label(add) {
            tracing::warn!(iid = issue_iid, label = remove, "label removed but replacement missing");
            return Err(stage_failed(SwapStage::Add, None));
        }

        Ok(added)
    }
}
