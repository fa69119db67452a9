use achievement_core_db::models::achievement::{
    AchievementContentModel, AchievementReferenceModel, AchievementStatus, Attachment, ContentPatch,
};
use achievement_core_db::models::profile::{LecturerModel, StudentModel};
use achievement_core_db::repository::{
    AchievementContentRepository, AchievementReferenceRepository, LecturerRepository, Page,
    PageRequest, StudentRepository, TokenVersionRepository,
};
use achievement_core_db::{StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use heapless::String as HeaplessString;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::{permissions, Principal, Role};

fn principal(role: Role, scoped_id: Option<Uuid>, granted: &[&str]) -> Principal {
    Principal {
        user_id: Uuid::new_v4(),
        role,
        permissions: granted.iter().map(|p| p.to_string()).collect(),
        token_version: 0,
        scoped_id,
    }
}

pub fn student_principal(student_id: Uuid) -> Principal {
    principal(
        Role::Student,
        Some(student_id),
        &[permissions::ACHIEVEMENT_CREATE, permissions::ACHIEVEMENT_READ],
    )
}

pub fn advisor_principal(lecturer_id: Uuid) -> Principal {
    principal(
        Role::LecturerAdvisor,
        Some(lecturer_id),
        &[permissions::ACHIEVEMENT_READ, permissions::ACHIEVEMENT_VERIFY],
    )
}

pub fn admin_principal() -> Principal {
    principal(
        Role::Admin,
        None,
        &[
            permissions::ACHIEVEMENT_CREATE,
            permissions::ACHIEVEMENT_READ,
            permissions::ACHIEVEMENT_VERIFY,
            permissions::USER_MANAGE,
        ],
    )
}

/// Same role and scope, stripped of every permission.
pub fn without_permissions(principal: Principal) -> Principal {
    Principal {
        permissions: Default::default(),
        ..principal
    }
}

pub fn create_test_student(user_id: Uuid, advisor_id: Option<Uuid>) -> StudentModel {
    StudentModel {
        id: Uuid::new_v4(),
        user_id,
        student_code: HeaplessString::try_from("434221001").unwrap(),
        program_study: Some("Informatics".to_string()),
        academic_year: Some(HeaplessString::try_from("2024").unwrap()),
        advisor_id,
        created_at: Utc::now(),
    }
}

pub fn create_test_lecturer(user_id: Uuid) -> LecturerModel {
    LecturerModel {
        id: Uuid::new_v4(),
        user_id,
        lecturer_code: HeaplessString::try_from("198001012005").unwrap(),
        department: Some("Computer Science".to_string()),
        created_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct InMemoryTokenVersions {
    versions: Mutex<HashMap<Uuid, i32>>,
}

impl InMemoryTokenVersions {
    pub fn add_user(&self, version: i32) -> Uuid {
        let user_id = Uuid::new_v4();
        self.versions.lock().unwrap().insert(user_id, version);
        user_id
    }

    pub fn version_of(&self, user_id: Uuid) -> Option<i32> {
        self.versions.lock().unwrap().get(&user_id).copied()
    }
}

#[async_trait]
impl TokenVersionRepository for InMemoryTokenVersions {
    async fn current_version(&self, user_id: Uuid) -> StoreResult<Option<i32>> {
        Ok(self.version_of(user_id))
    }

    async fn increment(&self, user_id: Uuid) -> StoreResult<i32> {
        let mut versions = self.versions.lock().unwrap();
        let version = versions
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")))?;
        *version += 1;
        Ok(*version)
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    students: Mutex<HashMap<Uuid, StudentModel>>,
    lecturers: Mutex<HashMap<Uuid, LecturerModel>>,
}

impl InMemoryProfiles {
    pub fn add_student(&self, student: StudentModel) {
        self.students.lock().unwrap().insert(student.id, student);
    }

    pub fn add_lecturer(&self, lecturer: LecturerModel) {
        self.lecturers.lock().unwrap().insert(lecturer.id, lecturer);
    }

    pub fn student(&self, id: Uuid) -> Option<StudentModel> {
        self.students.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl StudentRepository for InMemoryProfiles {
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<StudentModel>> {
        let students = self.students.lock().unwrap();
        Ok(students.values().find(|s| s.user_id == user_id).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<StudentModel>> {
        Ok(self.student(id))
    }

    async fn find_by_advisor_id(&self, lecturer_id: Uuid) -> StoreResult<Vec<StudentModel>> {
        let students = self.students.lock().unwrap();
        Ok(students
            .values()
            .filter(|s| s.is_advised_by(lecturer_id))
            .cloned()
            .collect())
    }

    async fn assign_advisor(&self, student_id: Uuid, lecturer_id: Uuid) -> StoreResult<()> {
        let mut students = self.students.lock().unwrap();
        let student = students
            .get_mut(&student_id)
            .ok_or_else(|| StoreError::NotFound(format!("student {student_id}")))?;
        student.advisor_id = Some(lecturer_id);
        Ok(())
    }
}

#[async_trait]
impl LecturerRepository for InMemoryProfiles {
    async fn find_by_user_id(&self, user_id: Uuid) -> StoreResult<Option<LecturerModel>> {
        let lecturers = self.lecturers.lock().unwrap();
        Ok(lecturers.values().find(|l| l.user_id == user_id).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<LecturerModel>> {
        Ok(self.lecturers.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<LecturerModel>> {
        let mut lecturers: Vec<_> = self.lecturers.lock().unwrap().values().cloned().collect();
        lecturers.sort_by(|a, b| a.lecturer_code.cmp(&b.lecturer_code));
        Ok(lecturers)
    }
}

/// Reference rows kept in a map, with switches to simulate failures and
/// interleavings.
#[derive(Default)]
pub struct InMemoryReferences {
    rows: Mutex<HashMap<Uuid, AchievementReferenceModel>>,
    pub fail_inserts: AtomicBool,
    /// Yield to the scheduler after every read so concurrent callers
    /// observe the same snapshot before either writes.
    pub yield_after_read: AtomicBool,
    /// Fail verify and reject before anything is written.
    pub fail_reviews: AtomicBool,
    /// Status the stored row moves to right after the next read, as if a
    /// concurrent request committed in between.
    pub status_after_read: Mutex<Option<AchievementStatus>>,
}

impl InMemoryReferences {
    pub fn get(&self, id: Uuid) -> Option<AchievementReferenceModel> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn put(&self, reference: AchievementReferenceModel) {
        self.rows.lock().unwrap().insert(reference.id, reference);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn guarded<F>(&self, id: Uuid, from: AchievementStatus, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut AchievementReferenceModel),
    {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) if row.status == from => {
                f(row);
                row.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(StoreError::Conflict(format!(
                "achievement reference {id} is no longer {from}"
            ))),
        }
    }

    fn visible_sorted<P>(&self, predicate: P) -> Vec<AchievementReferenceModel>
    where
        P: Fn(&AchievementReferenceModel) -> bool,
    {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<_> = rows
            .values()
            .filter(|r| !r.is_deleted() && predicate(r))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }
}

#[async_trait]
impl AchievementReferenceRepository for InMemoryReferences {
    async fn insert(&self, reference: AchievementReferenceModel) -> StoreResult<Uuid> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("relational store is down"));
        }
        if reference.status != AchievementStatus::Draft {
            return Err(StoreError::Conflict("reference must start as draft".to_string()));
        }
        let id = reference.id;
        self.put(reference);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<AchievementReferenceModel>> {
        let row = self.get(id);
        if let Some(status) = self.status_after_read.lock().unwrap().take() {
            if let Some(stored) = self.rows.lock().unwrap().get_mut(&id) {
                stored.status = status;
            }
        }
        if self.yield_after_read.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        Ok(row)
    }

    async fn find_all(&self, page: PageRequest) -> StoreResult<Page<AchievementReferenceModel>> {
        Ok(Page::from_all(self.visible_sorted(|_| true), page))
    }

    async fn find_by_student_ids(
        &self,
        student_ids: &[Uuid],
        page: PageRequest,
    ) -> StoreResult<Page<AchievementReferenceModel>> {
        Ok(Page::from_all(
            self.visible_sorted(|r| student_ids.contains(&r.student_id)),
            page,
        ))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: AchievementStatus,
        to: AchievementStatus,
    ) -> StoreResult<()> {
        if !from.can_transition_to(to) || to != AchievementStatus::Submitted {
            return Err(StoreError::Conflict(format!("cannot move from {from} to {to}")));
        }
        self.guarded(id, from, |row| {
            row.status = to;
            if to == AchievementStatus::Submitted {
                row.submitted_at = Some(Utc::now());
            }
        })
    }

    async fn verify(&self, id: Uuid, lecturer_id: Uuid) -> StoreResult<()> {
        if self.fail_reviews.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("connection reset"));
        }
        self.guarded(id, AchievementStatus::Submitted, |row| {
            row.status = AchievementStatus::Verified;
            row.verified_by = Some(lecturer_id);
            row.verified_at = Some(Utc::now());
        })
    }

    async fn reject(&self, id: Uuid, note: &str) -> StoreResult<()> {
        if self.fail_reviews.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("connection reset"));
        }
        self.guarded(id, AchievementStatus::Submitted, |row| {
            row.status = AchievementStatus::Rejected;
            row.rejection_note = Some(note.to_string());
            row.rejected_at = Some(Utc::now());
        })
    }

    async fn touch(&self, id: Uuid, expected: AchievementStatus) -> StoreResult<()> {
        self.guarded(id, expected, |_| {})
    }

    async fn soft_delete(&self, id: Uuid, from: AchievementStatus) -> StoreResult<()> {
        self.guarded(id, from, |row| {
            row.status = AchievementStatus::Deleted;
            row.deleted_at = Some(Utc::now());
        })
    }
}

/// Content documents kept in a map, with failure switches.
#[derive(Default)]
pub struct InMemoryContents {
    docs: Mutex<HashMap<String, AchievementContentModel>>,
    next_id: AtomicU64,
    pub fail_inserts: AtomicBool,
    pub fail_soft_delete: AtomicBool,
    pub fail_mark_status: AtomicBool,
}

impl InMemoryContents {
    pub fn get(&self, content_ref: &str) -> Option<AchievementContentModel> {
        self.docs.lock().unwrap().get(content_ref).cloned()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    fn update<F>(&self, content_ref: &str, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut AchievementContentModel),
    {
        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .get_mut(content_ref)
            .ok_or_else(|| StoreError::NotFound(format!("achievement content {content_ref}")))?;
        f(doc);
        doc.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl AchievementContentRepository for InMemoryContents {
    async fn insert(&self, mut content: AchievementContentModel) -> StoreResult<String> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("document store is down"));
        }
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        content.id = id.clone();
        self.docs.lock().unwrap().insert(id.clone(), content);
        Ok(id)
    }

    async fn find_by_ref(&self, content_ref: &str) -> StoreResult<Option<AchievementContentModel>> {
        Ok(self.get(content_ref))
    }

    async fn partial_update(&self, content_ref: &str, patch: &ContentPatch) -> StoreResult<()> {
        let patch = patch.clone();
        self.update(content_ref, move |doc| {
            if let Some(v) = patch.achievement_type {
                doc.achievement_type = v;
            }
            if let Some(v) = patch.title {
                doc.title = v;
            }
            if let Some(v) = patch.description {
                doc.description = v;
            }
            if let Some(v) = patch.details {
                doc.details = v;
            }
            if let Some(v) = patch.tags {
                doc.tags = v;
            }
            if let Some(v) = patch.points {
                doc.points = v;
            }
        })
    }

    async fn append_attachment(&self, content_ref: &str, attachment: &Attachment) -> StoreResult<()> {
        let attachment = attachment.clone();
        self.update(content_ref, move |doc| doc.attachments.push(attachment))
    }

    async fn mark_status(&self, content_ref: &str, status: AchievementStatus) -> StoreResult<()> {
        if self.fail_mark_status.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("document store is down"));
        }
        self.update(content_ref, |doc| doc.status = status)
    }

    async fn soft_delete(&self, content_ref: &str) -> StoreResult<()> {
        if self.fail_soft_delete.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("document store is down"));
        }
        self.update(content_ref, |doc| {
            doc.status = AchievementStatus::Deleted;
            doc.deleted_at = Some(Utc::now());
        })
    }
}
