use db::models::assignee::Assignee;

pub const MAX_VISIBLE_CHIPS: usize = 3;

/// Assignees that can still be added: everyone in `all` whose id is not in `assigned`.
pub fn available_assignees<'a>(all: &'a [Assignee], assigned: &[Assignee]) -> Vec<&'a Assignee> {
    all.iter()
        .filter(|candidate| !assigned.iter().any(|a| a.id == candidate.id))
        .collect()
}

/// The add affordance is disabled once every known assignee is assigned.
pub fn can_add(all: &[Assignee], assigned: &[Assignee]) -> bool {
    assigned.len() < all.len()
}

/// `assigned` with `candidate` appended, or `None` if its id is already present.
pub fn with_assignee(assigned: &[Assignee], candidate: &Assignee) -> Option<Vec<Assignee>> {
    if assigned.iter().any(|a| a.id == candidate.id) {
        return None;
    }
    let mut next = assigned.to_vec();
    next.push(candidate.clone());
    Some(next)
}

pub fn without_assignee(assigned: &[Assignee], assignee_id: &str) -> Vec<Assignee> {
    assigned
        .iter()
        .filter(|a| a.id != assignee_id)
        .cloned()
        .collect()
}

/// Inline chips for an assignee cell. Anything past the first three collapses into a
/// single `+N` badge whose hover surface lists the overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeChips {
    pub visible: Vec<Assignee>,
    pub overflow: Vec<Assignee>,
}

impl AssigneeChips {
    pub fn new(assignees: &[Assignee]) -> Self {
        let split = assignees.len().min(MAX_VISIBLE_CHIPS);
        let (visible, overflow) = assignees.split_at(split);
        Self {
            visible: visible.to_vec(),
            overflow: overflow.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len() + self.overflow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn badge(&self) -> Option<String> {
        (!self.overflow.is_empty()).then(|| format!("+{}", self.overflow.len()))
    }
}

/// Open/closed state of the add-assignee popover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssigneePicker {
    open: bool,
}

impl AssigneePicker {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
