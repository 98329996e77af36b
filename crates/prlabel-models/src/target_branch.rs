/// Release routing of a pull request, from its base branch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetBranch {
    /// Targets the staging branch.
    Staging,
    /// Targets the release branch.
    Release,
    /// Merges the release branch back into develop.
    MasterToDevelop,
}
