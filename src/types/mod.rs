//! Typed model of the Bot API's JSON objects.
//!
//! One-of wire shapes follow two conventions, each modelled explicitly:
//!
//! - **tag-discriminated** objects (`ChatMember`, [`MessageOrigin`],
//!   [`ReactionType`], [`BotCommandScope`], [`MenuButton`], [`InputMedia`],
//!   [`InlineQueryResult`], [`PassportElementError`]) are Rust enums whose
//!   serialization stamps the canonical tag and whose deserialization
//!   rejects unrecognized tags (wrap in [`MaybeUnknown`] to decode
//!   leniently);
//! - **mutually-exclusive optional fields** ([`Update`], [`Message`]
//!   content) stay plain structs with derived accessor views
//!   ([`Update::kind`], [`Message::content`]).

pub mod chat;
pub mod chat_member;
pub mod commands;
pub mod inline;
pub mod input_media;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod passport;
pub mod primitives;
pub mod reaction;
pub mod unknown;
pub mod update;
pub mod user;

pub use chat::{
    Chat, ChatAdministratorRights, ChatInviteLink, ChatJoinRequest, ChatLocation,
    ChatMemberUpdated, ChatPermissions, ChatPhoto, ForumTopic,
};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted,
};
pub use commands::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription, MenuButton,
};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGame,
    InlineQueryResultGif, InlineQueryResultLocation, InlineQueryResultMpeg4Gif,
    InlineQueryResultPhoto, InlineQueryResultVenue, InlineQueryResultVideo,
    InlineQueryResultVoice, InlineQueryResultsButton, InputContactMessageContent,
    InputInvoiceMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent, LabeledPrice, SentWebAppMessage,
};
pub use input_media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use keyboard::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, LoginUrl,
    ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup, WebAppInfo,
};
pub use media::{
    Animation, Audio, Contact, Dice, Document, File, Location, PhotoSize, Poll, PollAnswer,
    PollOption, Sticker, Venue, Video, VideoNote, Voice,
};
pub use message::{
    Message, MessageContent, MessageEntity, MessageId, MessageOrTrue, MessageOrigin,
    MessageOriginChannel, MessageOriginChat, MessageOriginHiddenUser, MessageOriginUser,
};
pub use passport::{
    EncryptedCredentials, EncryptedPassportElement, PassportData, PassportElementError,
    PassportFile,
};
pub use primitives::{BotToken, ChatId, ParseMode};
pub use reaction::{
    MessageReactionCountUpdated, MessageReactionUpdated, ReactionCount, ReactionType,
};
pub use unknown::{MaybeUnknown, UnknownVariant};
pub use update::{CallbackQuery, Update, UpdateKind, WebhookInfo};
pub use user::{User, UserProfilePhotos};
