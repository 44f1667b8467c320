//! Catalog filters: search and facet predicates applied to listings.
//!
//! A criterion that is absent, blank, or `"all"` matches everything.

use serde::Deserialize;

use crate::models::catalog::{Course, LeaderboardEntry, Project};

const ALL: &str = "all";

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL))
}

/// Case-insensitive substring match against title or description.
fn matches_search(search: Option<&str>, title: &str, description: &str) -> bool {
    let Some(term) = search else {
        return true;
    };
    let term = term.to_lowercase();
    title.to_lowercase().contains(&term) || description.to_lowercase().contains(&term)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        matches_search(active(&self.search), &project.title, &project.description)
            && active(&self.tag).map_or(true, |tag| project.tags.iter().any(|t| t == tag))
    }

    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        matches_search(active(&self.search), &course.title, &course.description)
            && active(&self.category).map_or(true, |c| course.category == c)
            && active(&self.level).map_or(true, |l| course.level == l)
    }

    pub fn apply(&self, courses: Vec<Course>) -> Vec<Course> {
        courses.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Distinct non-empty values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

pub fn course_categories(courses: &[Course]) -> Vec<String> {
    distinct(courses.iter().map(|c| c.category.as_str()))
}

pub fn course_levels(courses: &[Course]) -> Vec<String> {
    distinct(courses.iter().map(|c| c.level.as_str()))
}

pub fn project_tags(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
}

/// Rank ascending; equal ranks by points descending.
pub fn order_leaderboard(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| a.rank.cmp(&b.rank).then(b.points.cmp(&a.points)));
}
