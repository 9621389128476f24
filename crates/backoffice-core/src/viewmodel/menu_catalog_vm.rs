//! ============================================================================
//! MENU CATALOG VIEW MODEL
//! ============================================================================
//!
//! State untuk halaman manajemen menu: kotak pencarian, tab kategori, dan empat
//! modal (Add, Edit, View, Delete) yang masing-masing punya state sendiri.
//!
//! ## Dependencies:
//! - `MenuCatalogService` → semua baca/tulis list menu lewat service
//!
//! ## Impact:
//! - Submit yang sukses menutup modal dan mengisi `notice`
//! - Submit yang gagal mengembalikan modal ke Open dan mengisi `error`

use std::sync::Arc;

use tracing::debug;

use super::modal::{ModalKind, ModalSlot, ModalState};
use crate::domain::{CategoryCounts, CategoryFilter, MenuItem, MenuItemDraft, MenuQuery};
use crate::error::DomainError;
use crate::repositories::MenuRepository;
use crate::services::MenuCatalogService;

pub struct MenuCatalogViewModel<R: MenuRepository + ?Sized> {
    /// Isi kotak pencarian (case-insensitive, substring)
    pub search_term: String,

    /// Tab kategori yang aktif
    pub category_filter: CategoryFilter,

    /// Pesan error terakhir (validasi atau operasi gagal)
    pub error: Option<String>,

    /// Pesan sukses terakhir
    pub notice: Option<String>,

    add: ModalSlot,
    edit: ModalSlot,
    view: ModalSlot,
    delete: ModalSlot,

    service: Arc<MenuCatalogService<R>>,
}

impl<R: MenuRepository + ?Sized> MenuCatalogViewModel<R> {
    pub fn new(service: Arc<MenuCatalogService<R>>) -> Self {
        Self {
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            error: None,
            notice: None,
            add: ModalSlot::default(),
            edit: ModalSlot::default(),
            view: ModalSlot::default(),
            delete: ModalSlot::default(),
            service,
        }
    }

    // ========================================================================
    // LIST & FILTER
    // ========================================================================

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    pub fn query(&self) -> MenuQuery {
        MenuQuery::new(&self.search_term, self.category_filter)
    }

    /// Item yang lolos filter saat ini (urutan list dipertahankan)
    pub async fn visible_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.service.list(&self.query()).await
    }

    pub async fn counts(&self) -> Result<CategoryCounts, DomainError> {
        self.service.counts().await
    }

    // ========================================================================
    // MODALS
    // ========================================================================

    pub fn modal_state(&self, kind: ModalKind) -> ModalState {
        self.slot(kind).state
    }

    /// Item yang sedang dibuka di modal Edit/View/Delete
    pub fn selected(&self, kind: ModalKind) -> Option<&MenuItem> {
        self.slot(kind).target.as_ref()
    }

    pub fn open_add(&mut self) {
        self.clear_messages();
        self.add.open(None);
    }

    pub async fn open_edit(&mut self, id: &str) -> Result<(), DomainError> {
        self.open_with_item(ModalKind::Edit, id).await
    }

    pub async fn open_view(&mut self, id: &str) -> Result<(), DomainError> {
        self.open_with_item(ModalKind::View, id).await
    }

    pub async fn open_delete(&mut self, id: &str) -> Result<(), DomainError> {
        self.open_with_item(ModalKind::Delete, id).await
    }

    /// Tombol Batal. Ditolak selama submit masih berjalan.
    pub fn close(&mut self, kind: ModalKind) -> Result<(), DomainError> {
        self.slot_mut(kind).close(kind)
    }

    pub async fn submit_add(&mut self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        self.add.begin_submit(ModalKind::Add)?;
        let service = Arc::clone(&self.service);
        let result = service.create(draft).await;
        self.finish(ModalKind::Add, result, |item| format!("Menu \"{}\" added", item.name))
    }

    pub async fn submit_edit(&mut self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let id = self.target_id(ModalKind::Edit)?;
        self.edit.begin_submit(ModalKind::Edit)?;
        let service = Arc::clone(&self.service);
        let result = service.update(&id, draft).await;
        self.finish(ModalKind::Edit, result, |item| format!("Menu \"{}\" updated", item.name))
    }

    /// Konfirmasi hapus dari modal Delete
    pub async fn confirm_delete(&mut self) -> Result<MenuItem, DomainError> {
        let id = self.target_id(ModalKind::Delete)?;
        self.delete.begin_submit(ModalKind::Delete)?;
        let service = Arc::clone(&self.service);
        let result = service.delete(&id).await;
        self.finish(ModalKind::Delete, result, |item| format!("Menu \"{}\" deleted", item.name))
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    async fn open_with_item(&mut self, kind: ModalKind, id: &str) -> Result<(), DomainError> {
        self.clear_messages();
        match self.service.get(id).await {
            Ok(item) => {
                debug!("Opening {} modal for menu {}", kind, id);
                self.slot_mut(kind).open(Some(item));
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn target_id(&self, kind: ModalKind) -> Result<String, DomainError> {
        self.selected(kind)
            .map(|item| item.id.clone())
            .ok_or(DomainError::ModalNotOpen(kind))
    }

    fn finish(
        &mut self,
        kind: ModalKind,
        result: Result<MenuItem, DomainError>,
        notice: impl FnOnce(&MenuItem) -> String,
    ) -> Result<MenuItem, DomainError> {
        self.slot_mut(kind).finish_submit(result.is_ok());
        match &result {
            Ok(item) => {
                self.error = None;
                self.notice = Some(notice(item));
            }
            Err(e) => {
                self.notice = None;
                self.error = Some(e.user_message());
            }
        }
        result
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    fn slot(&self, kind: ModalKind) -> &ModalSlot {
        match kind {
            ModalKind::Add => &self.add,
            ModalKind::Edit => &self.edit,
            ModalKind::View => &self.view,
            ModalKind::Delete => &self.delete,
        }
    }

    fn slot_mut(&mut self, kind: ModalKind) -> &mut ModalSlot {
        match kind {
            ModalKind::Add => &mut self.add,
            ModalKind::Edit => &mut self.edit,
            ModalKind::View => &mut self.view,
            ModalKind::Delete => &mut self.delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{Category, DefaultImages};
    use crate::repositories::MockMenuRepository;

    fn stored(id: &str, name: &str) -> MenuItem {
        MenuItem::from_draft(
            id.into(),
            MenuItemDraft::new(name, Category::Food, 20000, "Enak"),
            &DefaultImages::default(),
        )
    }

    fn view_model(repo: MockMenuRepository, latency: Duration) -> MenuCatalogViewModel<MockMenuRepository> {
        let service = MenuCatalogService::new(Arc::new(repo), DefaultImages::default(), latency, 8);
        MenuCatalogViewModel::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_submit_requires_open_modal() {
        let mut vm = view_model(MockMenuRepository::new(), Duration::ZERO);
        let result = vm
            .submit_add(MenuItemDraft::new("Es Teh", Category::Beverage, 5000, "Teh dingin"))
            .await;
        assert_eq!(result, Err(DomainError::ModalNotOpen(ModalKind::Add)));

        let result = vm.confirm_delete().await;
        assert_eq!(result, Err(DomainError::ModalNotOpen(ModalKind::Delete)));
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_modal_open() {
        let mut vm = view_model(MockMenuRepository::new(), Duration::ZERO);
        vm.open_add();

        let result = vm.submit_add(MenuItemDraft::new("", Category::Food, 0, "")).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
        assert_eq!(vm.modal_state(ModalKind::Add), ModalState::Open);
        assert!(vm.error.is_some());
        assert!(vm.notice.is_none());
    }

    #[tokio::test]
    async fn test_open_unknown_item_stays_closed() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let mut vm = view_model(repo, Duration::ZERO);
        let result = vm.open_edit("77").await;

        assert_eq!(result, Err(DomainError::MenuItemNotFound("77".into())));
        assert_eq!(vm.modal_state(ModalKind::Edit), ModalState::Closed);
        assert!(vm.selected(ModalKind::Edit).is_none());
    }

    #[tokio::test]
    async fn test_confirm_delete_closes_modal() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, "Soto Ayam"))));
        repo.expect_delete()
            .times(1)
            .returning(|id| Ok(stored(id, "Soto Ayam")));
        repo.expect_list().returning(|| Ok(Vec::new()));

        let mut vm = view_model(repo, Duration::ZERO);
        vm.open_delete("5").await.unwrap();
        assert_eq!(vm.modal_state(ModalKind::Delete), ModalState::Open);
        assert_eq!(vm.selected(ModalKind::Delete).map(|m| m.id.as_str()), Some("5"));

        let removed = vm.confirm_delete().await.unwrap();
        assert_eq!(removed.id, "5");
        assert_eq!(vm.modal_state(ModalKind::Delete), ModalState::Closed);
        assert_eq!(vm.notice.as_deref(), Some("Menu \"Soto Ayam\" deleted"));
    }

    #[tokio::test]
    async fn test_failed_operation_reports_generic_message() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, "Soto Ayam"))));
        repo.expect_delete()
            .returning(|_| Err(DomainError::OperationFailed("disk full".into())));

        let mut vm = view_model(repo, Duration::ZERO);
        vm.open_delete("5").await.unwrap();

        let result = vm.confirm_delete().await;
        assert!(matches!(result, Err(DomainError::OperationFailed(_))));
        assert_eq!(vm.modal_state(ModalKind::Delete), ModalState::Open);
        assert_eq!(vm.error.as_deref(), Some("Operation failed. Please try again."));
    }

    #[tokio::test]
    async fn test_dropped_submission_blocks_resubmit_and_close() {
        let mut vm = view_model(MockMenuRepository::new(), Duration::from_millis(200));
        vm.open_add();

        let draft = MenuItemDraft::new("Es Teh", Category::Beverage, 5000, "Teh dingin");
        let timed_out = tokio::time::timeout(Duration::from_millis(5), vm.submit_add(draft.clone())).await;
        assert!(timed_out.is_err());
        assert_eq!(vm.modal_state(ModalKind::Add), ModalState::Submitting);

        assert_eq!(
            vm.submit_add(draft).await,
            Err(DomainError::SubmissionInFlight(ModalKind::Add))
        );
        assert_eq!(vm.close(ModalKind::Add), Err(DomainError::SubmissionInFlight(ModalKind::Add)));
    }

    #[tokio::test]
    async fn test_view_and_close() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, "Gado-gado"))));

        let mut vm = view_model(repo, Duration::ZERO);
        vm.open_view("2").await.unwrap();
        assert_eq!(vm.selected(ModalKind::View).map(|m| m.name.as_str()), Some("Gado-gado"));

        vm.close(ModalKind::View).unwrap();
        assert_eq!(vm.modal_state(ModalKind::View), ModalState::Closed);
        assert!(vm.selected(ModalKind::View).is_none());
    }
}
