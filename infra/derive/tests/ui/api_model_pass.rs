use folio_derive::api_model;

#[api_model]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    pub message: Option<String>,
}

fn main() {
    let _ = Envelope { success: true, message: None };
}
