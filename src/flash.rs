use tower_cookies::{Cookie, Cookies};

const FLASH_COOKIE: &str = "flash";

/// One-shot notices carried across a redirect. Stored as a short code so the
/// cookie value never needs encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    AccountExists,
    SignInToComment,
}

impl Notice {
    fn code(self) -> &'static str {
        match self {
            Notice::AccountExists => "account-exists",
            Notice::SignInToComment => "sign-in-to-comment",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "account-exists" => Some(Notice::AccountExists),
            "sign-in-to-comment" => Some(Notice::SignInToComment),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::AccountExists => "Email exists. Please login instead",
            Notice::SignInToComment => "Must be signed in to comment",
        }
    }
}

pub fn set(cookies: &Cookies, notice: Notice) {
    let mut cookie = Cookie::new(FLASH_COOKIE, notice.code());
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Reads and consumes the pending notice, if any.
pub fn take(cookies: &Cookies) -> Option<Notice> {
    let notice = Notice::from_code(cookies.get(FLASH_COOKIE)?.value())?;
    let mut cookie = Cookie::new(FLASH_COOKIE, "");
    cookie.set_path("/");
    cookies.remove(cookie);
    Some(notice)
}

#[cfg(test)]
mod tests {
    use super::Notice;

    #[test]
    fn codes_round_trip() {
        for notice in [Notice::AccountExists, Notice::SignInToComment] {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("garbage"), None);
    }
}
