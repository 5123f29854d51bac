//! User & Profile Endpoints
//!
//! Partners (app users) are listed, edited through the shared profile
//! update endpoint and deleted by user id. The signed-in admin's own
//! profile uses the same update endpoint.

use async_trait::async_trait;
use list_manager::{
    humanize, Ack, ConfirmPrompt, FieldValue, FormFields, ListError, ListResult, ListSource, ModalMode,
};
use serde_json::json;

use super::envelope::{decode_ack, decode_list, decode_object};
use super::{require_user, ApiClient};
use crate::models::{Partner, Profile};

pub const PARTNER_ROLES: &[(&str, &str)] = &[("husband", "Husband"), ("wife", "Wife")];

pub async fn fetch_partners(api: &ApiClient) -> ListResult<Vec<Partner>> {
    let body = api.get("/partner-list", &[]).await?;
    decode_list(&body, "data")
}

/// Both password fields must agree; blank means "keep the current one"
fn check_passwords(fields: &FormFields) -> ListResult<()> {
    if fields.text("password") != fields.text("password_confirm") {
        return Err(ListError::Validation("Passwords do not match!".to_string()));
    }
    Ok(())
}

fn check_required(fields: &FormFields, required: &[&str]) -> ListResult<()> {
    match fields.first_blank(required) {
        Some(name) => Err(ListError::Validation(format!("{} cannot be empty", humanize(name)))),
        None => Ok(()),
    }
}

/// Staged fields minus blank optional secrets and an unselected photo
fn profile_payload(fields: &FormFields, user_id: u64) -> FormFields {
    let mut payload = FormFields::new();
    for (name, value) in fields.iter() {
        let optional = matches!(name, "password" | "password_confirm" | "upload_photo");
        if optional && value.is_blank() {
            continue;
        }
        payload.set(name, value.clone());
    }
    payload.set_text("user_id", user_id.to_string());
    payload
}

// ========================
// Partners
// ========================

pub struct Partners {
    api: ApiClient,
}

impl Partners {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<Partner> for Partners {
    fn noun(&self) -> &'static str {
        "user"
    }

    async fn fetch(&self) -> ListResult<Vec<Partner>> {
        fetch_partners(&self.api).await
    }

    async fn update(&self, target: &Partner, fields: &FormFields) -> ListResult<Ack> {
        let payload = profile_payload(fields, target.id);
        decode_ack(&self.api.post_form("/profile-update", &payload).await?)
    }

    async fn delete(&self, target: &Partner) -> ListResult<Ack> {
        decode_ack(&self.api.post_json("/user-delete", &json!({ "user_id": target.id })).await?)
    }

    fn edit_form(&self, record: &Partner) -> FormFields {
        FormFields::new()
            .with("my_name", record.first_name.clone())
            .with("my_partner_name", record.my_partner_name.clone())
            .with("mobile", record.mobile.clone())
            .with("email", record.email.clone())
            .with("my_partner_mobile", record.my_partner_mobile.clone())
            .with("my_partner_email", record.my_partner_email.clone())
            .with("partner", record.partner.to_lowercase())
            .with("password", "")
            .with("password_confirm", "")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["my_name", "email"]
    }

    fn validate(&self, fields: &FormFields, _mode: ModalMode) -> ListResult<()> {
        check_required(fields, self.required_fields())?;
        check_passwords(fields)
    }

    fn refetch_after_delete(&self) -> bool {
        true
    }

    fn delete_prompt(&self, _record: &Partner) -> ConfirmPrompt {
        ConfirmPrompt::new("Are you sure?", "You will not be able to recover this user!")
    }
}

// ========================
// Own Profile
// ========================

pub async fn fetch_profile(api: &ApiClient, user_id: Option<u64>) -> ListResult<Profile> {
    let user_id = require_user(user_id)?;
    let body = api.post_json("/profile-list", &json!({ "user_id": user_id })).await?;
    decode_object(&body, Some("data"))
}

pub fn profile_form(profile: &Profile) -> FormFields {
    FormFields::new()
        .with("first_name", profile.first_name.clone())
        .with("my_partner_name", profile.my_partner_name.clone())
        .with("mobile", profile.mobile.clone())
        .with("my_partner_mobile", profile.my_partner_mobile.clone())
        .with("email", profile.email.clone())
        .with("address", profile.address.clone())
        .with("password", "")
}

/// Saved profile image path echoed by the server, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSaved {
    pub ack: Ack,
    pub image: Option<String>,
}

pub async fn update_profile(api: &ApiClient, user_id: Option<u64>, fields: &FormFields) -> ListResult<ProfileSaved> {
    let user_id = require_user(user_id)?;
    check_required(fields, &["first_name", "email"])?;
    let payload = profile_payload(fields, user_id);
    let body = api.post_form("/profile-update", &payload).await?;
    let ack = decode_ack(&body)?;
    let image = decode_object::<Profile>(&body, Some("data")).ok().and_then(|p| p.image);
    Ok(ProfileSaved { ack, image })
}

/// Replace the staged photo, keeping the rest of the form
pub fn with_photo(mut fields: FormFields, photo: Option<FieldValue>) -> FormFields {
    match photo {
        Some(photo) => fields.set("upload_photo", photo),
        None => {
            fields.remove("upload_photo");
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_manager::Attachment;

    #[test]
    fn test_password_mismatch_is_rejected() {
        let fields = FormFields::new()
            .with("my_name", "Sam")
            .with("email", "s@x.io")
            .with("password", "one")
            .with("password_confirm", "two");
        let source = Partners::new(ApiClient::new("https://api.test", None));
        assert_eq!(
            source.validate(&fields, ModalMode::Edit),
            Err(ListError::Validation("Passwords do not match!".to_string()))
        );
    }

    #[test]
    fn test_required_partner_fields() {
        let source = Partners::new(ApiClient::new("https://api.test", None));
        let fields = source.edit_form(&Partner { id: 1, email: "a@b.c".into(), ..Default::default() });
        assert_eq!(
            source.validate(&fields, ModalMode::Edit),
            Err(ListError::Validation("My name cannot be empty".to_string()))
        );
    }

    #[test]
    fn test_payload_drops_blank_password_and_photo() {
        let fields = FormFields::new()
            .with("first_name", "Asha")
            .with("password", "")
            .with("password_confirm", "");
        let payload = profile_payload(&fields, 42);
        assert_eq!(payload.text("user_id"), "42");
        assert_eq!(payload.text("first_name"), "Asha");
        assert!(payload.get("password").is_none());
        assert!(payload.get("upload_photo").is_none());
    }

    #[test]
    fn test_payload_keeps_selected_photo() {
        let photo = Attachment {
            file_name: "me.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        };
        let fields = with_photo(FormFields::new().with("password", "secret"), Some(FieldValue::File(photo.clone())));
        let payload = profile_payload(&fields, 1);
        assert_eq!(payload.file("upload_photo"), Some(&photo));
        assert_eq!(payload.text("password"), "secret");
    }

    #[test]
    fn test_profile_form_prefill() {
        let profile = Profile { first_name: "Asha".into(), address: "Pune".into(), ..Default::default() };
        let fields = profile_form(&profile);
        assert_eq!(fields.text("first_name"), "Asha");
        assert_eq!(fields.text("address"), "Pune");
        assert!(fields.is_blank("password"));
    }
}
