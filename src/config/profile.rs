//! Profile definitions — classic, release, maven.
//!
//! Each profile is an explicit ordered list of pipeline stages. The observed
//! hook revisions accreted stages over time; every revision maps to its own
//! profile here instead of guessing a single canonical sequence.

use super::schema::ProfileName;
use crate::pipeline::StageKind;

// ---------------------------------------------------------------------------
// ProfileDefinition
// ---------------------------------------------------------------------------

/// Describes a single profile's characteristics.
#[derive(Debug, Clone)]
pub struct ProfileDefinition {
    /// Which profile this describes.
    pub name: ProfileName,
    /// Human-readable description.
    pub description: &'static str,
    /// The ordered stage list the runner executes.
    pub stages: Vec<StageKind>,
}

impl ProfileDefinition {
    /// Whether this profile signs the packaged artifact (and therefore
    /// requires the storepass file to exist before anything runs).
    pub fn signs(&self) -> bool {
        self.stages.contains(&StageKind::Sign)
    }
}

// ---------------------------------------------------------------------------
// Profile constructors
// ---------------------------------------------------------------------------

/// Get the profile definition for a given name.
pub fn get_profile(name: &ProfileName) -> ProfileDefinition {
    match name {
        ProfileName::Classic => classic_profile(),
        ProfileName::Release => release_profile(),
        ProfileName::Maven => maven_profile(),
    }
}

/// All profiles, for listing.
pub fn all_profiles() -> Vec<ProfileDefinition> {
    vec![classic_profile(), release_profile(), maven_profile()]
}

/// Classic profile — compile, package, stage. The first-revision pre-commit.
pub fn classic_profile() -> ProfileDefinition {
    ProfileDefinition {
        name: ProfileName::Classic,
        description: "Compile sources, copy resources and license, pack the jar, stage it",
        stages: vec![
            StageKind::Compile,
            StageKind::Resources,
            StageKind::License,
            StageKind::Package,
            StageKind::GitStage,
        ],
    }
}

/// Release profile — classic plus version bump, signing, and javadoc.
pub fn release_profile() -> ProfileDefinition {
    ProfileDefinition {
        name: ProfileName::Release,
        description: "Classic build plus build-number bump, jar signing, and javadoc",
        stages: vec![
            StageKind::Bump,
            StageKind::Compile,
            StageKind::Resources,
            StageKind::License,
            StageKind::Package,
            StageKind::Sign,
            StageKind::Docs,
            StageKind::GitStage,
        ],
    }
}

/// Maven profile — delegate compile+package+docs to the build tool, then
/// relocate and sign its artifacts. Mutually exclusive with the manual
/// compile/package stages.
pub fn maven_profile() -> ProfileDefinition {
    ProfileDefinition {
        name: ProfileName::Maven,
        description: "Delegate the build to mvn, relocate its artifacts, sign, stage",
        stages: vec![
            StageKind::Bump,
            StageKind::MavenBuild,
            StageKind::Sign,
            StageKind::GitStage,
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_stages_last() {
        for profile in all_profiles() {
            assert_eq!(
                profile.stages.last(),
                Some(&StageKind::GitStage),
                "{} must stage artifacts last",
                profile.name
            );
        }
    }

    #[test]
    fn classic_does_not_sign_or_bump() {
        let p = classic_profile();
        assert!(!p.signs());
        assert!(!p.stages.contains(&StageKind::Bump));
        assert!(!p.stages.contains(&StageKind::Docs));
    }

    #[test]
    fn release_signs_and_bumps() {
        let p = release_profile();
        assert!(p.signs());
        assert_eq!(p.stages.first(), Some(&StageKind::Bump));
        assert!(p.stages.contains(&StageKind::Docs));
    }

    #[test]
    fn maven_excludes_manual_build_stages() {
        let p = maven_profile();
        assert!(p.stages.contains(&StageKind::MavenBuild));
        for manual in [
            StageKind::Compile,
            StageKind::Resources,
            StageKind::License,
            StageKind::Package,
        ] {
            assert!(
                !p.stages.contains(&manual),
                "maven profile must not contain {manual}"
            );
        }
    }

    #[test]
    fn get_profile_matches_name() {
        for name in [ProfileName::Classic, ProfileName::Release, ProfileName::Maven] {
            assert_eq!(get_profile(&name).name, name);
        }
    }
}
