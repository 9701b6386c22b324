//! Subcommand handlers: run one query and print its result.

use std::fmt::Display;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::args::{Command, MergeRequestStateArg, StateArg};
use crate::client::Transport;
use crate::logic::{IssueState, MergeRequestState};
use crate::service::GitlabService;

pub struct Printer {
    pub json: bool,
}

impl Printer {
    fn item(&self, text: impl Display) {
        println!(" - {text}");
    }

    fn nested(&self, text: impl Display) {
        println!("     * {text}");
    }

    fn list<T: Display + Serialize>(&self, items: &[T]) -> Result<()> {
        if self.json {
            return self.raw(items);
        }
        if items.is_empty() {
            println!("[INFO] Nothing found.");
        }
        items.iter().for_each(|item| self.item(item));
        Ok(())
    }

    fn raw<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
        println!("{text}");
        Ok(())
    }
}

pub async fn run<T: Transport>(service: &GitlabService<T>, command: Command, printer: &Printer) -> Result<()> {
    match command {
        Command::Projects { search, quantity } => {
            let projects = service.projects(quantity, search.as_deref()).await?;
            printer.list(&projects)
        }
        Command::Issues {
            project,
            state,
            quantity,
        } => {
            let issues = match state {
                StateArg::Opened if quantity.is_none() => service.opened_issues(&project).await?,
                StateArg::Opened => service.issues_with_state(&project, IssueState::Opened, quantity).await?,
                StateArg::Closed => service.issues_with_state(&project, IssueState::Closed, quantity).await?,
                StateArg::All => service.all_issues(&project, quantity).await?,
            };
            printer.list(&issues)
        }
        Command::Milestones {
            project,
            only_active,
            quantity,
        } => {
            let milestones = service.milestones(&project, only_active, quantity).await?;
            printer.list(&milestones)
        }
        Command::MilestoneIssues { project, milestone } => {
            let issues = service.milestone_issues(&project, &milestone).await?;
            printer.list(&issues)
        }
        Command::Releases { project, quantity } => {
            let releases = service.releases(&project, quantity).await?;
            if printer.json {
                return printer.raw(&releases);
            }
            for release in &releases {
                printer.item(release);
                release.milestones().iter().for_each(|m| printer.nested(m));
            }
            Ok(())
        }
        Command::Release { project, release } => {
            let release = service.release_by_name(&project, &release).await?;
            if printer.json {
                return printer.raw(&release);
            }
            printer.item(&release);
            release.milestones().iter().for_each(|m| printer.nested(m));
            release.asset_links().iter().for_each(|l| printer.nested(l));
            Ok(())
        }
        Command::ReleaseIssues { project, release } => {
            let issues = service.release_issues(&project, &release).await?;
            printer.list(&issues)
        }
        Command::Tags { project, quantity } => {
            let tags = service.tags(&project, quantity).await?;
            printer.list(&tags)
        }
        Command::TagPipeline { project, tag } => {
            let pipeline = service
                .successful_tag_pipeline(&project, &tag)
                .await?
                .ok_or_else(|| anyhow!("no successful pipeline found for tag {tag}"))?;
            if printer.json {
                return printer.raw(&pipeline);
            }
            printer.item(&pipeline);
            Ok(())
        }
        Command::Pipelines { project, quantity } => {
            let pipelines = service.pipelines(&project, quantity).await?;
            printer.list(&pipelines)
        }
        Command::Labels { project, quantity } => {
            let labels = service.labels(&project, quantity).await?;
            printer.list(&labels)
        }
        Command::MergeRequests {
            project,
            state,
            quantity,
        } => {
            let state = state.map(|s| match s {
                MergeRequestStateArg::Opened => MergeRequestState::Opened,
                MergeRequestStateArg::Closed => MergeRequestState::Closed,
                MergeRequestStateArg::Merged => MergeRequestState::Merged,
            });
            let merge_requests = service.merge_requests(&project, state, quantity).await?;
            printer.list(&merge_requests)
        }
        Command::Packages { project, quantity } => {
            let packages = service.packages(&project, quantity).await?;
            printer.list(&packages)
        }
        Command::SwapLabel {
            project,
            issue,
            from,
            to,
        } => {
            let updated = service
                .swap_issue_label(&project, issue, &from, &to)
                .await
                .with_context(|| format!("could not replace label {from} with {to}"))?;
            if printer.json {
                return printer.raw(&updated);
            }
            println!("[INFO] Label {from} replaced with {to}.");
            printer.item(&updated);
            Ok(())
        }
    }
}
