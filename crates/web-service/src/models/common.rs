use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 创建成功后返回的新记录 ID
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Created {
    #[schema(example = 7)]
    pub id: i32,
}
