// ABOUTME: Global guard rail applied after every goal-mode strategy
// ABOUTME: Never lets a low-adherence week raise steps or protein targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors

use super::{AdjustmentContext, TargetPlan};
use tracing::debug;

/// Caps proposed targets at the current ones when adherence was low
pub struct GuardRail;

impl GuardRail {
    /// Clamp `plan` in place; returns whether any target was lowered
    ///
    /// Decreases proposed by a strategy always pass through.
    pub fn apply(ctx: &AdjustmentContext, plan: &mut TargetPlan) -> bool {
        if !ctx.adherence.low {
            return false;
        }

        let capped_steps = plan.next_steps.min(ctx.current_steps);
        let capped_protein = plan.next_protein.min(ctx.current_protein);
        let clamped = capped_steps != plan.next_steps || capped_protein != plan.next_protein;

        if clamped {
            debug!(
                proposed_steps = plan.next_steps,
                proposed_protein = plan.next_protein,
                "Low adherence week, holding targets at current values"
            );
            plan.next_steps = capped_steps;
            plan.next_protein = capped_protein;
            plan.reason("Very low consistency this week. Targets will not go up until the current ones feel doable.");
        }
        clamped
    }
}
