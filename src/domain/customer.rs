use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
