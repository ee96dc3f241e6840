use chrono::{Duration, Local, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    models::{
        assignee::Assignee,
        task::{TASK_PRIORITIES, TASK_STATUSES, Task},
    },
    store::TaskStore,
};

pub const DEFAULT_ASSIGNEE_COUNT: usize = 5;
pub const DEFAULT_TASK_COUNT: usize = 50;

const MAX_ASSIGNEES_PER_TASK: usize = 3;
const DUE_WINDOW_DAYS: i64 = 30;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Katherine",
    "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Goldwasser", "Hamilton", "Hopper", "Johnson", "Kernighan", "Liskov", "Lovelace",
    "Matsumoto", "Perlman", "Ritchie", "Thompson", "Torvalds", "Turing", "Wirth",
];

/// Generates sample assignees and tasks for a fresh store.
pub struct Seeder<R> {
    rng: R,
    today: NaiveDate,
}

impl Seeder<StdRng> {
    /// A fixed seed produces the same store on every run.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, Local::now().date_naive())
    }
}

impl<R: Rng> Seeder<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    pub fn assignees(&mut self, count: usize) -> Vec<Assignee> {
        (1..=count)
            .map(|index| Assignee {
                id: index.to_string(),
                name: self.full_name(),
                avatar: format!(
                    "https://avatars.githubusercontent.com/u/{}",
                    self.rng.random_range(1..100_000_000u32)
                ),
            })
            .collect()
    }

    /// Each task gets between one and three distinct assignees drawn from `pool`.
    pub fn tasks(&mut self, count: usize, pool: &[Assignee]) -> Vec<Task> {
        (1..=count)
            .map(|index| {
                let assignees = self.pick_assignees(pool);
                let status = TASK_STATUSES.choose(&mut self.rng).copied().unwrap_or("Pending");
                let priority = TASK_PRIORITIES.choose(&mut self.rng).copied().unwrap_or("Low");
                let offset = self.rng.random_range(0..=DUE_WINDOW_DAYS);

                Task {
                    id: index.to_string(),
                    assignees,
                    status: status.to_string(),
                    priority: priority.to_string(),
                    due_date: (self.today + Duration::days(offset))
                        .format("%Y-%m-%d")
                        .to_string(),
                }
            })
            .collect()
    }

    pub fn store(mut self, assignee_count: usize, task_count: usize) -> TaskStore {
        let assignees = self.assignees(assignee_count);
        let tasks = self.tasks(task_count, &assignees);

        tracing::info!(
            assignees = assignees.len(),
            tasks = tasks.len(),
            "seeded task store"
        );
        TaskStore::new(assignees, tasks)
    }

    fn full_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Ada");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Lovelace");
        format!("{first} {last}")
    }

    fn pick_assignees(&mut self, pool: &[Assignee]) -> Vec<Assignee> {
        let max = pool.len().min(MAX_ASSIGNEES_PER_TASK);
        if max == 0 {
            return Vec::new();
        }
        let amount = self.rng.random_range(1..=max);
        pool.choose_multiple(&mut self.rng, amount).cloned().collect()
    }
}
