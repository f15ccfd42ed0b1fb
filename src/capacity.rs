//! Capacity Projection
//!
//! Hours a sprint member would have left after taking a user story.

use crate::models::AssignableMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityProjection {
    pub estimate: i64,
    pub capacity: i64,
    /// Hours used once the story is assigned
    pub projected_used: i64,
    pub remaining: i64,
}

impl CapacityProjection {
    /// The estimate is only added when `candidate` is not already the assignee,
    /// since the current assignee's used hours include the story.
    pub fn project(candidate: &AssignableMember, original: Option<u32>, estimate: i64) -> Self {
        let projected_used = if original == Some(candidate.id) {
            candidate.used_capacity
        } else {
            candidate.used_capacity.saturating_add(estimate)
        };
        Self {
            estimate,
            capacity: candidate.capacity,
            projected_used,
            remaining: candidate.capacity.saturating_sub(projected_used),
        }
    }

    /// Projection for the member with id `candidate`, if it is assignable
    pub fn for_candidate(
        members: &[AssignableMember],
        candidate: Option<u32>,
        original: Option<u32>,
        estimate: i64,
    ) -> Option<Self> {
        let candidate = candidate?;
        members
            .iter()
            .find(|m| m.id == candidate)
            .map(|member| Self::project(member, original, estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u32) -> AssignableMember {
        AssignableMember { id, username: format!("m{}", id), capacity: 40, used_capacity: 10 }
    }

    #[test]
    fn new_assignee_takes_the_estimate() {
        let p = CapacityProjection::project(&member(2), Some(1), 8);
        assert_eq!(p.projected_used, 18);
        assert_eq!(p.remaining, 22);
    }

    #[test]
    fn current_assignee_is_not_counted_twice() {
        let p = CapacityProjection::project(&member(1), Some(1), 8);
        assert_eq!(p.projected_used, 10);
        assert_eq!(p.remaining, 30);
    }

    #[test]
    fn unassigned_story_counts_for_everyone() {
        let p = CapacityProjection::project(&member(1), None, 8);
        assert_eq!(p.projected_used, 18);
    }

    #[test]
    fn overbooking_goes_negative() {
        let busy = AssignableMember { id: 3, username: "busy".into(), capacity: 10, used_capacity: 9 };
        assert_eq!(CapacityProjection::project(&busy, None, 5).remaining, -4);
    }

    #[test]
    fn absurd_page_values_saturate() {
        let full = AssignableMember { id: 4, username: "full".into(), capacity: 40, used_capacity: i64::MAX };
        let p = CapacityProjection::project(&full, None, 8);
        assert_eq!(p.projected_used, i64::MAX);
        assert_eq!(p.remaining, 40 - i64::MAX);

        let empty = AssignableMember { id: 5, username: "empty".into(), capacity: i64::MIN, used_capacity: 0 };
        assert_eq!(CapacityProjection::project(&empty, None, 8).remaining, i64::MIN);
    }

    #[test]
    fn unknown_candidate_has_no_projection() {
        let members = vec![member(1), member(2)];
        assert_eq!(CapacityProjection::for_candidate(&members, Some(9), Some(1), 8), None);
        assert_eq!(CapacityProjection::for_candidate(&members, None, Some(1), 8), None);
        assert!(CapacityProjection::for_candidate(&members, Some(2), Some(1), 8).is_some());
    }
}
