//! In-memory editor draft of a single hub.
//!
//! The admin editor loads a hub, mutates a draft, and sends the whole
//! document back on save. [`HubDraft`] carries those mutations and tracks
//! whether anything changed since the last save.

use chrono::Utc;
use uuid::Uuid;

use crate::hub::{Block, BlockPatch, Hub, HubUpdate, SocialLink};
use crate::reorder;
use crate::slug;

/// Editable draft of one hub.
#[derive(Debug, Clone)]
pub struct HubDraft {
    hub: Hub,
    dirty: bool,
}

impl HubDraft {
    /// Start editing `hub`.
    pub fn new(hub: Hub) -> Self {
        Self { hub, dirty: false }
    }

    /// Current draft state.
    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Whether the draft has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the draft as saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Set the event name.
    pub fn set_event_name(&mut self, name: impl Into<String>) {
        self.hub.event_name = name.into();
        self.dirty = true;
    }

    /// Set the slug from operator input, sanitizing it first.
    pub fn set_slug(&mut self, input: &str) {
        self.hub.slug = slug::sanitize_slug_input(input);
        self.dirty = true;
    }

    /// Edit any other field of the hub.
    pub fn update(&mut self, edit: impl FnOnce(&mut Hub)) {
        edit(&mut self.hub);
        self.dirty = true;
    }

    /// Append a default block and return its id.
    pub fn add_block(&mut self) -> String {
        let id = generate_block_id();
        let block = Block::new(id.clone(), self.hub.blocks.len() as i32);
        self.hub.blocks.push(block);
        self.dirty = true;
        id
    }

    /// Apply `patch` to the block with `id`. Returns `false` if no such block.
    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> bool {
        let Some(block) = self.hub.blocks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        block.apply(patch);
        self.dirty = true;
        true
    }

    /// Remove the block with `id` and renumber the rest.
    pub fn remove_block(&mut self, id: &str) -> bool {
        let before = self.hub.blocks.len();
        self.hub.blocks.retain(|b| b.id != id);
        if self.hub.blocks.len() == before {
            return false;
        }
        reorder::renumber(&mut self.hub.blocks);
        self.dirty = true;
        true
    }

    /// Drag a block from one position to another.
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        let moved = self.hub.reorder_blocks(from, to);
        self.dirty |= moved;
        moved
    }

    /// Drag a page section from one position to another.
    pub fn move_section(&mut self, from: usize, to: usize) -> bool {
        let moved = self.hub.reorder_sections(from, to);
        self.dirty |= moved;
        moved
    }

    /// Flip the publish flag and return the new state.
    pub fn toggle_published(&mut self) -> bool {
        self.hub.is_published = !self.hub.is_published;
        self.dirty = true;
        self.hub.is_published
    }

    /// Append a blank social link.
    pub fn add_social_link(&mut self) {
        self.hub.social_links.push(SocialLink::blank());
        self.dirty = true;
    }

    /// Remove the social link at `index`.
    pub fn remove_social_link(&mut self, index: usize) -> bool {
        if index >= self.hub.social_links.len() {
            return false;
        }
        self.hub.social_links.remove(index);
        self.dirty = true;
        true
    }

    /// The full-document update sent when the operator saves.
    pub fn into_update(self) -> HubUpdate {
        HubUpdate::replace_with(&self.hub)
    }
}

/// `block_<millis>_<4 chars>`.
fn generate_block_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("block_{}_{}", Utc::now().timestamp_millis(), &suffix[..4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::{Section, SocialPlatform};

    fn draft_with_blocks(n: usize) -> HubDraft {
        let mut draft = HubDraft::new(Hub::new("fan-fest", "Fan Fest"));
        for _ in 0..n {
            draft.add_block();
        }
        draft.mark_saved();
        draft
    }

    #[test]
    fn test_add_block_defaults() {
        let mut draft = HubDraft::new(Hub::default());
        assert!(!draft.is_dirty());

        let id = draft.add_block();
        assert!(id.starts_with("block_"));
        assert!(draft.is_dirty());

        let block = draft.hub().block(&id).unwrap();
        assert_eq!(block.title, "New Block");
        assert_eq!(block.description, "Tap to interact");
        assert_eq!(block.sort_order, 0);
        assert!(block.is_visible);
    }

    #[test]
    fn test_generated_ids_differ() {
        let mut draft = HubDraft::new(Hub::default());
        let a = draft.add_block();
        let b = draft.add_block();
        assert_ne!(a, b);
        assert_eq!(draft.hub().blocks[1].sort_order, 1);
    }

    #[test]
    fn test_remove_block_renumbers() {
        let mut draft = draft_with_blocks(3);
        let first = draft.hub().blocks[0].id.clone();

        assert!(draft.remove_block(&first));
        let orders: Vec<i32> = draft.hub().blocks.iter().map(|b| b.sort_order).collect();
        assert_eq!(orders, [0, 1]);
        assert!(!draft.remove_block("missing"));
    }

    #[test]
    fn test_update_block() {
        let mut draft = draft_with_blocks(1);
        let id = draft.hub().blocks[0].id.clone();
        assert!(draft.update_block(
            &id,
            BlockPatch {
                title: Some("Polls".into()),
                ..Default::default()
            }
        ));
        assert_eq!(draft.hub().blocks[0].title, "Polls");
        assert!(!draft.update_block("nope", BlockPatch::default()));
    }

    #[test]
    fn test_noop_move_keeps_clean() {
        let mut draft = draft_with_blocks(2);
        assert!(!draft.move_block(1, 1));
        assert!(!draft.is_dirty());
        assert!(draft.move_block(1, 0));
        assert!(draft.is_dirty());
    }

    #[test]
    fn test_set_slug_sanitizes() {
        let mut draft = HubDraft::new(Hub::default());
        draft.set_slug("  Fan Zone 2025! ");
        assert_eq!(draft.hub().slug, "fan-zone-2025");
    }

    #[test]
    fn test_social_links_and_sections() {
        let mut draft = HubDraft::new(Hub::default());
        draft.add_social_link();
        draft.update(|hub| hub.social_links[0].platform = SocialPlatform::Tiktok);
        assert!(draft.remove_social_link(0));
        assert!(!draft.remove_social_link(0));

        assert!(draft.move_section(0, 2));
        assert!(draft.toggle_published());

        let update = draft.into_update();
        assert_eq!(
            update.section_order,
            Some(vec![Section::Hero, Section::Blocks, Section::Sponsor])
        );
        assert_eq!(update.is_published, Some(true));
        assert_eq!(update.social_links, Some(Vec::new()));
    }
}
