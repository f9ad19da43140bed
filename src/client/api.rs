//! Endpoint facade: one thin method per remote API operation.
//!
//! Every method here is parameter assembly over the request gateway in the
//! parent module; wire names stay camelCase, the Rust surface is snake_case.
//! Methods that accept a trailing [`Params`] forward arbitrary extra fields
//! verbatim, which keeps the client forward-compatible with API fields it
//! does not model.

use serde_json::{Map, Value};

use super::BaleBot;
use crate::error::Result;
use crate::params::{ChatId, MessageRef, Params};
use crate::upload::FileInput;

fn chat_payload(chat_id: ChatId) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("chat_id".to_string(), chat_id.into_value());
    payload
}

impl BaleBot {
    // --- identity & updates ---

    pub async fn get_me(&self) -> Result<Value> {
        self.get("getMe", Map::new()).await
    }

    /// Long-poll fetch; blocks its task for up to `timeout` seconds on the
    /// server side. Offset bookkeeping is left to the caller.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let mut query = Map::new();
        if let Some(offset) = offset {
            query.insert("offset".to_string(), Value::from(offset));
        }
        if let Some(timeout) = timeout {
            query.insert("timeout".to_string(), Value::from(timeout));
        }
        if let Some(limit) = limit {
            query.insert("limit".to_string(), Value::from(limit));
        }
        self.get("getUpdates", query).await
    }

    // --- messaging ---

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("text".to_string(), Value::from(text.into()));
        extra.merge_into(&mut payload);
        self.post_json("sendMessage", payload).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("from_chat_id".to_string(), from_chat_id.into().into_value());
        payload.insert("message_id".to_string(), Value::from(message_id));
        self.post_json("forwardMessage", payload).await
    }

    pub async fn copy_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("from_chat_id".to_string(), from_chat_id.into().into_value());
        payload.insert("message_id".to_string(), Value::from(message_id));
        extra.merge_into(&mut payload);
        self.post_json("copyMessage", payload).await
    }

    pub async fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("message_id".to_string(), Value::from(message_id));
        self.post_json("deleteMessage", payload).await
    }

    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("latitude".to_string(), Value::from(latitude));
        payload.insert("longitude".to_string(), Value::from(longitude));
        extra.merge_into(&mut payload);
        self.post_json("sendLocation", payload).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("phone_number".to_string(), Value::from(phone_number.into()));
        payload.insert("first_name".to_string(), Value::from(first_name.into()));
        extra.merge_into(&mut payload);
        self.post_json("sendContact", payload).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: impl Into<String>,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("action".to_string(), Value::from(action.into()));
        self.post_json("sendChatAction", payload).await
    }

    /// `media` is the pre-built media description array the API expects.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<ChatId>,
        media: Value,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("media".to_string(), media);
        extra.merge_into(&mut payload);
        self.post_json("sendMediaGroup", payload).await
    }

    // --- media uploads ---

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendPhoto", payload, "photo", photo.into())
            .await
    }

    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendAudio", payload, "audio", audio.into())
            .await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendDocument", payload, "document", document.into())
            .await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendVideo", payload, "video", video.into())
            .await
    }

    pub async fn send_animation(
        &self,
        chat_id: impl Into<ChatId>,
        animation: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendAnimation", payload, "animation", animation.into())
            .await
    }

    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendVoice", payload, "voice", voice.into())
            .await
    }

    pub async fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: impl Into<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_upload("sendSticker", payload, "sticker", sticker.into())
            .await
    }

    // --- stickers ---

    pub async fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("user_id".to_string(), Value::from(user_id));
        payload.insert("name".to_string(), Value::from(name.into()));
        payload.insert("title".to_string(), Value::from(title.into()));
        extra.merge_into(&mut payload);
        self.post_json("createNewStickerSet", payload).await
    }

    pub async fn add_sticker_to_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("user_id".to_string(), Value::from(user_id));
        payload.insert("name".to_string(), Value::from(name.into()));
        extra.merge_into(&mut payload);
        self.post_json("addStickerToSet", payload).await
    }

    pub async fn delete_sticker_from_set(&self, sticker: impl Into<String>) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("sticker".to_string(), Value::from(sticker.into()));
        self.post_json("deleteStickerFromSet", payload).await
    }

    pub async fn upload_sticker_file(
        &self,
        user_id: i64,
        png_sticker: impl Into<FileInput>,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("user_id".to_string(), Value::from(user_id));
        self.post_upload("uploadStickerFile", payload, "png_sticker", png_sticker.into())
            .await
    }

    // --- callbacks, web apps & payments ---

    pub async fn answer_callback_query(
        &self,
        callback_query_id: impl Into<String>,
        text: Option<&str>,
        show_alert: Option<bool>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert(
            "callback_query_id".to_string(),
            Value::from(callback_query_id.into()),
        );
        if let Some(text) = text {
            payload.insert("text".to_string(), Value::from(text));
        }
        if let Some(show_alert) = show_alert {
            payload.insert("show_alert".to_string(), Value::from(show_alert));
        }
        extra.merge_into(&mut payload);
        self.post_json("answerCallbackQuery", payload).await
    }

    pub async fn answer_web_app_query(
        &self,
        web_app_query_id: impl Into<String>,
        result: Value,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert(
            "web_app_query_id".to_string(),
            Value::from(web_app_query_id.into()),
        );
        payload.insert("result".to_string(), result);
        self.post_json("answerWebAppQuery", payload).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn send_invoice(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
        description: impl Into<String>,
        invoice_payload: impl Into<String>,
        provider_token: impl Into<String>,
        start_parameter: impl Into<String>,
        currency: impl Into<String>,
        prices: Value,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("title".to_string(), Value::from(title.into()));
        payload.insert("description".to_string(), Value::from(description.into()));
        payload.insert("payload".to_string(), Value::from(invoice_payload.into()));
        payload.insert(
            "provider_token".to_string(),
            Value::from(provider_token.into()),
        );
        payload.insert(
            "start_parameter".to_string(),
            Value::from(start_parameter.into()),
        );
        payload.insert("currency".to_string(), Value::from(currency.into()));
        payload.insert("prices".to_string(), prices);
        extra.merge_into(&mut payload);
        self.post_json("sendInvoice", payload).await
    }

    pub async fn create_invoice_link(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        invoice_payload: impl Into<String>,
        provider_token: impl Into<String>,
        currency: impl Into<String>,
        prices: Value,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("title".to_string(), Value::from(title.into()));
        payload.insert("description".to_string(), Value::from(description.into()));
        payload.insert("payload".to_string(), Value::from(invoice_payload.into()));
        payload.insert(
            "provider_token".to_string(),
            Value::from(provider_token.into()),
        );
        payload.insert("currency".to_string(), Value::from(currency.into()));
        payload.insert("prices".to_string(), prices);
        extra.merge_into(&mut payload);
        self.post_json("createInvoiceLink", payload).await
    }

    pub async fn answer_pre_checkout_query(
        &self,
        pre_checkout_query_id: impl Into<String>,
        ok: bool,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert(
            "pre_checkout_query_id".to_string(),
            Value::from(pre_checkout_query_id.into()),
        );
        payload.insert("ok".to_string(), Value::from(ok));
        extra.merge_into(&mut payload);
        self.post_json("answerPreCheckoutQuery", payload).await
    }

    /// Platform-specific review prompt; all fields are passthrough.
    pub async fn ask_review(&self, extra: Params) -> Result<Value> {
        let mut payload = Map::new();
        extra.merge_into(&mut payload);
        self.post_json("askReview", payload).await
    }

    // --- chat information & administration ---

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.get("getChat", chat_payload(chat_id.into())).await
    }

    pub async fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.get("getChatMembersCount", chat_payload(chat_id.into()))
            .await
    }

    pub async fn get_chat_administrators(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.get("getChatAdministrators", chat_payload(chat_id.into()))
            .await
    }

    pub async fn get_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<Value> {
        let mut query = chat_payload(chat_id.into());
        query.insert("user_id".to_string(), Value::from(user_id));
        self.get("getChatMember", query).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.post_json("leaveChat", chat_payload(chat_id.into()))
            .await
    }

    pub async fn set_chat_title(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("title".to_string(), Value::from(title.into()));
        self.post_json("setChatTitle", payload).await
    }

    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: impl Into<String>,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("description".to_string(), Value::from(description.into()));
        self.post_json("setChatDescription", payload).await
    }

    pub async fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.post_json("deleteChatPhoto", chat_payload(chat_id.into()))
            .await
    }

    pub async fn create_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        extra.merge_into(&mut payload);
        self.post_json("createChatInviteLink", payload).await
    }

    pub async fn revoke_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        invite_link: impl Into<String>,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("invite_link".to_string(), Value::from(invite_link.into()));
        self.post_json("revokeChatInviteLink", payload).await
    }

    pub async fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.post_json("exportChatInviteLink", chat_payload(chat_id.into()))
            .await
    }

    pub async fn ban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("user_id".to_string(), Value::from(user_id));
        extra.merge_into(&mut payload);
        self.post_json("banChatMember", payload).await
    }

    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("user_id".to_string(), Value::from(user_id));
        self.post_json("unbanChatMember", payload).await
    }

    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("user_id".to_string(), Value::from(user_id));
        extra.merge_into(&mut payload);
        self.post_json("restrictChatMember", payload).await
    }

    pub async fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("user_id".to_string(), Value::from(user_id));
        extra.merge_into(&mut payload);
        self.post_json("promoteChatMember", payload).await
    }

    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("message_id".to_string(), Value::from(message_id));
        extra.merge_into(&mut payload);
        self.post_json("pinChatMessage", payload).await
    }

    pub async fn unpin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("message_id".to_string(), Value::from(message_id));
        self.post_json("unpinChatMessage", payload).await
    }

    pub async fn unpin_all_chat_messages(&self, chat_id: impl Into<ChatId>) -> Result<Value> {
        self.post_json("unpinAllChatMessages", chat_payload(chat_id.into()))
            .await
    }

    // --- message editing ---

    pub async fn edit_message_text(
        &self,
        target: MessageRef,
        text: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        target.apply(&mut payload);
        payload.insert("text".to_string(), Value::from(text.into()));
        extra.merge_into(&mut payload);
        self.post_json("editMessageText", payload).await
    }

    pub async fn edit_message_caption(
        &self,
        target: MessageRef,
        caption: impl Into<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        target.apply(&mut payload);
        payload.insert("caption".to_string(), Value::from(caption.into()));
        extra.merge_into(&mut payload);
        self.post_json("editMessageCaption", payload).await
    }

    pub async fn edit_message_reply_markup(
        &self,
        target: MessageRef,
        reply_markup: Option<Value>,
    ) -> Result<Value> {
        let mut payload = Map::new();
        target.apply(&mut payload);
        if let Some(markup) = reply_markup {
            payload.insert("reply_markup".to_string(), markup);
        }
        self.post_json("editMessageReplyMarkup", payload).await
    }

    // --- polls ---

    pub async fn send_poll(
        &self,
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: Vec<String>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("question".to_string(), Value::from(question.into()));
        payload.insert("options".to_string(), Value::from(options));
        extra.merge_into(&mut payload);
        self.post_json("sendPoll", payload).await
    }

    pub async fn stop_poll(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = chat_payload(chat_id.into());
        payload.insert("message_id".to_string(), Value::from(message_id));
        extra.merge_into(&mut payload);
        self.post_json("stopPoll", payload).await
    }

    // --- webhooks ---

    /// `certificate` is optional; when it resolves to a local file or open
    /// stream the call switches to a multipart upload, otherwise everything
    /// travels in the JSON body.
    pub async fn set_webhook(
        &self,
        url: impl Into<String>,
        certificate: Option<FileInput>,
        extra: Params,
    ) -> Result<Value> {
        let mut payload = Map::new();
        payload.insert("url".to_string(), Value::from(url.into()));
        extra.merge_into(&mut payload);
        match certificate {
            Some(certificate) => {
                self.post_upload("setWebhook", payload, "certificate", certificate)
                    .await
            }
            None => self.post_json("setWebhook", payload).await,
        }
    }

    pub async fn delete_webhook(&self, drop_pending_updates: Option<bool>) -> Result<Value> {
        let mut payload = Map::new();
        if let Some(drop_pending_updates) = drop_pending_updates {
            payload.insert(
                "drop_pending_updates".to_string(),
                Value::from(drop_pending_updates),
            );
        }
        self.post_json("deleteWebhook", payload).await
    }

    pub async fn get_webhook_info(&self) -> Result<Value> {
        self.get("getWebhookInfo", Map::new()).await
    }

    // --- files ---

    /// File metadata lookup; the interesting field of the result is
    /// `file_path`, which feeds [`BaleBot::file_download_url`].
    pub async fn get_file(&self, file_id: &str) -> Result<Value> {
        let mut query = Map::new();
        query.insert("file_id".to_string(), Value::from(file_id));
        self.get("getFile", query).await
    }
}
