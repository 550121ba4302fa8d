mod auth;
pub use self::auth::{
    AuthResponse, ForgetPasswordRequest, LoginRequest, ResetPasswordRequest, SessionResponse,
    SignupRequest, UploadResponse,
};

mod comment;
pub use self::comment::{Comment, CommentsResponse};

mod post;
pub use self::post::{
    Post, PostAuthor, PostDraft, PostStatus, PostsResponse, PublishRequest,
};

mod tag;
pub use self::tag::{Tag, TagsResponse};

mod user;
pub use self::user::{Profile, Role, User, UserDetail};
