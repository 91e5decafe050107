use crate::error::PlanningError;
use crate::rotation::RotationQueue;
use crate::types::{MenuPlan, ScoredRecipe};

/// Fill an N-day plan from scored candidates.
///
/// Candidates are ranked by missing-ingredient count ascending, then total
/// prep+cook minutes ascending, then title ascending, and drawn through a
/// rotating eligibility pool: with `k` candidates and a horizon of `N <= k`
/// every slot gets a distinct recipe, and with `N > k` every recipe is used
/// `floor(N/k)` to `ceil(N/k)` times, none repeating before every other has
/// been placed as often. A best-effort rebalancing pass then keeps the plan
/// from being all-meat or all-meatless when the corpus offers both.
///
/// Deterministic: identical inputs always produce the identical plan.
pub fn select<'a>(
    scored: &[ScoredRecipe<'a>],
    days: usize,
) -> Result<MenuPlan<'a>, PlanningError> {
    if days == 0 {
        return Err(PlanningError::InvalidHorizon { days });
    }
    if scored.is_empty() {
        return Err(PlanningError::EmptyCorpus);
    }

    let ranked = rank(scored);
    let mut pool = RotationQueue::new(ranked.iter().copied());

    let mut slots: Vec<ScoredRecipe<'a>> = Vec::with_capacity(days);
    for _ in 0..days {
        let idx = pool.draw().ok_or(PlanningError::EmptyCorpus)?;
        slots.push(scored[idx].clone());
    }

    rebalance_dietary_mix(&mut slots, scored, &ranked);

    Ok(MenuPlan { days: slots })
}

/// Candidate indices in selection-priority order: fewest missing ingredients
/// first, quicker dishes among equals, title as the final tie-break.
fn rank(scored: &[ScoredRecipe<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|&a, &b| {
        let (left, right) = (&scored[a], &scored[b]);
        left.missing_count()
            .cmp(&right.missing_count())
            .then_with(|| left.recipe.total_minutes().cmp(&right.recipe.total_minutes()))
            .then_with(|| left.recipe.title.cmp(&right.recipe.title))
    });
    order
}

/// Soft dietary-mix pass: if the filled plan is monotonic on the meat/fish
/// flag while the corpus offers both kinds, look for an opposite-flag recipe
/// among the top `ceil(N/2)` not-yet-placed candidates in rank order and
/// swap it into the lowest-priority slot whose missing count it matches or
/// beats. Finding no eligible swap leaves the plan as is.
fn rebalance_dietary_mix<'a>(
    slots: &mut [ScoredRecipe<'a>],
    scored: &[ScoredRecipe<'a>],
    ranked: &[usize],
) {
    // A one-day plan cannot mix flags.
    if slots.len() < 2 {
        return;
    }

    let has_meat = scored.iter().any(|s| s.recipe.contains_meat_or_fish);
    let has_meatless = scored.iter().any(|s| !s.recipe.contains_meat_or_fish);
    if !(has_meat && has_meatless) {
        return;
    }

    let monotonic_flag = slots[0].recipe.contains_meat_or_fish;
    if slots
        .iter()
        .any(|s| s.recipe.contains_meat_or_fish != monotonic_flag)
    {
        return;
    }

    let window = slots.len().div_ceil(2);
    let mut candidate: Option<&ScoredRecipe<'a>> = None;
    let mut considered = 0usize;
    for &idx in ranked {
        if considered == window {
            break;
        }
        let alternative = &scored[idx];
        if slots
            .iter()
            .any(|slot| std::ptr::eq(slot.recipe, alternative.recipe))
        {
            continue;
        }
        considered += 1;
        if alternative.recipe.contains_meat_or_fish != monotonic_flag {
            candidate = Some(alternative);
            break;
        }
    }
    let Some(candidate) = candidate else {
        return;
    };

    for slot in slots.iter_mut().rev() {
        if candidate.missing_count() <= slot.missing_count() {
            *slot = candidate.clone();
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::score;
    use crate::types::{InventorySet, RecipeRecord};

    fn recipe(title: &str, ingredients: &[&str], minutes: u32, meat: bool) -> RecipeRecord {
        RecipeRecord {
            title: title.to_string(),
            required_ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            prep_minutes: minutes / 2,
            cook_minutes: minutes - minutes / 2,
            contains_meat_or_fish: meat,
            source_url: String::new(),
        }
    }

    #[test]
    fn test_rank_orders_by_missing_then_time_then_title() {
        let recipes = vec![
            recipe("Slow", &["a", "b"], 90, false),
            recipe("Quick", &["a", "b"], 20, false),
            recipe("Stocked", &["owned"], 60, false),
            recipe("Also Quick", &["a", "b"], 20, false),
        ];
        let inventory = InventorySet::from_names(["owned"]);
        let scored = score(&recipes, &inventory).unwrap();

        let order = rank(&scored);
        let titles: Vec<_> = order.iter().map(|&i| scored[i].recipe.title.as_str()).collect();

        assert_eq!(titles, vec!["Stocked", "Also Quick", "Quick", "Slow"]);
    }

    #[test]
    fn test_invalid_horizon() {
        let recipes = vec![recipe("A", &["a"], 30, false)];
        let inventory = InventorySet::default();
        let scored = score(&recipes, &inventory).unwrap();

        assert_eq!(
            select(&scored, 0).unwrap_err(),
            PlanningError::InvalidHorizon { days: 0 }
        );
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(select(&[], 3).unwrap_err(), PlanningError::EmptyCorpus);
    }
}
