//! Daily Plan Tracker.
//!
//! A fixed checklist that starts over every calendar day. The stored
//! "last opened" marker decides whether the persisted plan is still today's;
//! when it is not, the canonical template replaces it wholesale.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::Result;
use crate::storage::{keys, load_record, save_record, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanItemType {
    Workout,
    Meal,
    Habit,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlanItem {
    pub id: String,
    pub time_of_day: TimeOfDay,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: PlanItemType,
    pub description: String,
    pub completed: bool,
}

impl DailyPlanItem {
    fn template(
        id: &str,
        time_of_day: TimeOfDay,
        title: &str,
        item_type: PlanItemType,
        description: &str,
    ) -> Self {
        Self {
            id: id.into(),
            time_of_day,
            title: title.into(),
            item_type,
            description: description.into(),
            completed: false,
        }
    }
}

/// The checklist every day starts from.
pub fn daily_template() -> Vec<DailyPlanItem> {
    use PlanItemType::*;
    use TimeOfDay::*;
    vec![
        DailyPlanItem::template(
            "dp1",
            Morning,
            "Hydrate First",
            Habit,
            "Drink 1 glass of water before checking phone.",
        ),
        DailyPlanItem::template(
            "dp2",
            Morning,
            "Morning Movement",
            Workout,
            "Complete a quick workout.",
        ),
        DailyPlanItem::template(
            "dp3",
            Afternoon,
            "Stand Up",
            Tip,
            "You have been sitting too long. Stretch for 2 mins.",
        ),
        DailyPlanItem::template(
            "dp4",
            Evening,
            "No Sugar Crash",
            Meal,
            "Choose a fruit over a candy bar.",
        ),
        DailyPlanItem::template(
            "dp5",
            Night,
            "Digital Sunset",
            Habit,
            "Blue light filter ON. Phone away 30m before bed.",
        ),
    ]
}

pub struct PlanTracker<'a> {
    store: &'a dyn Store,
    clock: &'a dyn Clock,
}

impl<'a> PlanTracker<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Today's plan, resetting to the template on a new day.
    ///
    /// A missing or unreadable plan also triggers the reset.
    pub fn load_today(&self) -> Result<Vec<DailyPlanItem>> {
        let today = self.clock.today();
        let last_open: Option<String> = load_record(self.store, keys::LAST_OPEN);
        let stored: Option<Vec<DailyPlanItem>> = load_record(self.store, keys::PLAN);

        match (last_open, stored) {
            (Some(day), Some(plan)) if day == today => Ok(plan),
            (previous, _) => {
                let plan = daily_template();
                save_record(self.store, keys::LAST_OPEN, &today)?;
                save_record(self.store, keys::PLAN, &plan)?;
                tracing::info!(
                    today = %today,
                    previous = previous.as_deref().unwrap_or("none"),
                    "daily plan reset"
                );
                Ok(plan)
            }
        }
    }

    /// Flip `completed` on the item with `id`. Unknown ids leave the plan as is.
    pub fn toggle_item(&self, id: &str) -> Result<Vec<DailyPlanItem>> {
        let mut plan = self.load_today()?;
        match plan.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                save_record(self.store, keys::PLAN, &plan)?;
            }
            None => tracing::debug!(id, "toggle for unknown plan item ignored"),
        }
        Ok(plan)
    }
}
