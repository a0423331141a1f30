// Chat Commands
//
// 聊天相关的界面命令，全部通过 ChatModule 处理业务逻辑

use serde::{Deserialize, Serialize};

use crate::infrastructure::AppState;
use crate::modules::chat::{
    Attachment, AttachmentKind, CloseConversationCommand, ConversationSummary, GetMessagesQuery,
    ListConversationsQuery, Message, ReplyTicket, SelectedFile, SendMessageCommand, SenderId,
};
use crate::modules::directory::CounterpartDirectory;
use crate::shared::{AppResult, MessageView, SenderView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub counterpart_id: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub message: MessageView,
    pub reply: Option<ReplyTicket>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub counterpart_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseConversationResponse {
    pub cancelled_replies: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachFilesRequest {
    pub kind: AttachmentKind,
    pub files: Vec<SelectedFile>,
}

/// 解析消息发送者的展示信息
async fn sender_view(state: &AppState, sender_id: &SenderId) -> AppResult<SenderView> {
    if sender_id.is_current_user() {
        return Ok(SenderView {
            id: sender_id.to_string(),
            name: state.config.general.current_user_name.clone(),
            avatar: state
                .config
                .general
                .current_user_avatar
                .clone()
                .unwrap_or_default(),
            is_current_user: true,
        });
    }

    let counterpart = match sender_id.as_counterpart() {
        Some(id) => state.directory.get(&id).await?,
        None => None,
    };

    Ok(match counterpart {
        Some(c) => SenderView {
            id: c.id().to_string(),
            name: c.name().to_string(),
            avatar: c.avatar_ref().to_string(),
            is_current_user: false,
        },
        None => SenderView::unknown(sender_id.as_str()),
    })
}

async fn message_view(state: &AppState, message: &Message) -> AppResult<MessageView> {
    let sender = sender_view(state, message.sender_id()).await?;
    Ok(MessageView::new(message, sender))
}

/// 发送消息
pub async fn chat_send_message(
    state: &AppState,
    request: SendMessageRequest,
) -> AppResult<SendMessageResponse> {
    tracing::info!(
        "[chat_send_message] Called with counterpart_id: {}",
        request.counterpart_id
    );

    let response = state
        .chat
        .send_message(SendMessageCommand::new(
            request.counterpart_id,
            request.content,
            request.attachments,
        ))
        .await?;

    Ok(SendMessageResponse {
        message: message_view(state, &response.message).await?,
        reply: response.reply,
    })
}

/// 获取会话时间线（选中联系人时调用）
pub async fn chat_get_messages(
    state: &AppState,
    request: ConversationRequest,
) -> AppResult<Vec<MessageView>> {
    let messages = state
        .chat
        .get_messages(GetMessagesQuery::new(request.counterpart_id))
        .await?;

    let mut views = Vec::with_capacity(messages.len());
    for message in &messages {
        views.push(message_view(state, message).await?);
    }
    Ok(views)
}

/// 联系人侧栏
pub async fn chat_list_conversations(state: &AppState) -> AppResult<Vec<ConversationSummary>> {
    Ok(state
        .chat
        .list_conversations(ListConversationsQuery)
        .await?)
}

/// 关闭会话，取消待发回复
pub async fn chat_close_conversation(
    state: &AppState,
    request: ConversationRequest,
) -> AppResult<CloseConversationResponse> {
    let response = state
        .chat
        .close_conversation(CloseConversationCommand::new(request.counterpart_id))
        .await?;

    Ok(CloseConversationResponse {
        cancelled_replies: response.cancelled_replies,
    })
}

/// 图片 / 文件选择器回调
pub async fn chat_attach_files(
    state: &AppState,
    request: AttachFilesRequest,
) -> AppResult<Vec<Attachment>> {
    tracing::debug!(
        "[chat_attach_files] {} {} file(s)",
        request.kind.as_str(),
        request.files.len()
    );
    Ok(state
        .chat
        .register_attachments(request.kind, request.files)
        .await)
}
