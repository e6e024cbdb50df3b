// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static translation catalogs for the site copy.
//!
//! Keys use dotted namespaces (`nav.blog`, `contact.form.submit`) and are
//! looked up in the active language's table only — there is deliberately no
//! cross-language fallback. A key missing from the active table comes back
//! as the key string itself, which makes a missing translation visibly
//! broken in the page rather than silently blank.
//!
//! ## Adding a key
//!
//! Add the entry to both `KO` and `EN`. `doctor` checks the two key sets for
//! parity, so a one-sided addition is flagged before it ships.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ko,
    En,
}

impl Lang {
    /// Two-letter language tag, as persisted and as used in
    /// `index.<lang>.md` content filenames.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ko => "ko",
            Lang::En => "en",
        }
    }

    /// Parse a language tag. Returns `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ko" => Some(Lang::Ko),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Ko, Lang::En]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up a translation key in the given language.
///
/// Total function: a key absent from the table returns the key itself,
/// never empty, never panics.
///
/// # Examples
///
/// ```
/// use artsite::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "nav.blog"), "Blog");
/// assert_eq!(t(Lang::Ko, "nav.blog"), "블로그");
/// assert_eq!(t(Lang::En, "no.such.key"), "no.such.key");
/// ```
pub fn t(lang: Lang, key: &str) -> &str {
    let table = catalog_for(lang);
    for &(k, v) in table {
        if k == key {
            return v;
        }
    }
    key
}

/// Key list for one language, in table order. Used by catalog parity checks.
pub(crate) fn keys_for(lang: Lang) -> impl Iterator<Item = &'static str> {
    catalog_for(lang).iter().map(|&(k, _)| k)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Ko => KO,
        Lang::En => EN,
    }
}

// ─── Korean ─────────────────────────────────────────────────────────

const KO: &[(&str, &str)] = &[
    // Brand
    ("brand.name", "아이스크림아트"),
    ("brand.tagline", "아트 × 교육 × 테크놀로지"),
    // Navigation
    ("nav.home", "홈"),
    ("nav.about", "회사 소개"),
    ("nav.products", "제품"),
    ("nav.blog", "블로그"),
    ("nav.news", "뉴스"),
    ("nav.contact", "문의하기"),
    // CTAs
    ("cta.explore_products", "제품 살펴보기"),
    ("cta.read_blog", "블로그 읽기"),
    ("cta.contact", "문의하기"),
    ("cta.partnership", "파트너십 문의"),
    ("cta.learn_more", "더 알아보기"),
    // Home
    ("home.headline", "전세계 어린이 행복 네트워크"),
    ("home.slogan", "아이들의 행복, 아트봉봉에서 시작합니다."),
    ("home.newsroom.title", "뉴스룸"),
    ("home.newsroom.view_all", "모든 뉴스 보기"),
    // Blog
    ("blog.title", "블로그"),
    ("blog.subtitle", "아트 교육 인사이트"),
    ("blog.readmore", "자세히 보기"),
    ("blog.back", "블로그로 돌아가기"),
    ("blog.prev", "이전 글"),
    ("blog.next", "다음 글"),
    ("blog.notfound", "게시물을 찾을 수 없습니다."),
    // Products
    ("products.title", "제품"),
    ("products.subtitle", "어린이 행복 네트워크를 만드는 아트 솔루션"),
    ("products.viewdetails", "자세히 보기"),
    ("products.comingsoon", "준비 중"),
    ("products.artbonbon.name", "아트봉봉"),
    ("products.artbonbon.desc", "아이들 창의력을 극대화하는 디지털 드로잉 툴"),
    ("products.school.name", "아트봉봉 스쿨"),
    ("products.school.desc", "교육기관을 위한 AI 기반 미술교육 솔루션"),
    ("products.gallery.name", "갤러리"),
    ("products.gallery.desc", "글로벌 소통을 위한 아트 플랫폼"),
    // Newsroom
    ("newsroom.title", "뉴스룸"),
    ("newsroom.subtitle", "최신 소식과 업데이트"),
    ("newsroom.press", "보도자료"),
    ("newsroom.events", "이벤트"),
    ("newsroom.awards", "수상"),
    ("newsroom.partnerships", "파트너십"),
    // Contact
    ("contact.title", "문의하기"),
    ("contact.subtitle", "어떤 문의든 환영합니다"),
    ("contact.happytalk.title", "문의하기"),
    ("contact.happytalk.desc", "해피톡을 통해 빠르게 문의하세요."),
    ("contact.happytalk.button", "문의하기"),
    ("contact.form.title", "문의하기"),
    ("contact.form.select", "선택해 주세요"),
    ("contact.form.submit", "문의 보내기"),
    ("contact.form.name", "이름"),
    ("contact.form.email", "이메일"),
    ("contact.form.subject", "제목"),
    ("contact.form.message", "메시지"),
    // Footer
    ("footer.company", "회사"),
    ("footer.products", "제품"),
    ("footer.careers", "인재 채용"),
    ("footer.resources", "리소스"),
    ("footer.legal", "법적 고지"),
    ("footer.privacy", "개인정보처리방침"),
    ("footer.terms", "이용약관"),
    ("footer.copyright", "© 2024 아이스크림아트. All rights reserved."),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Brand
    ("brand.name", "i-Scream arts"),
    ("brand.tagline", "Art × Education × Technology"),
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.products", "Products"),
    ("nav.blog", "Blog"),
    ("nav.news", "News"),
    ("nav.contact", "Contact"),
    // CTAs
    ("cta.explore_products", "Explore Products"),
    ("cta.read_blog", "Read Blog"),
    ("cta.contact", "Contact"),
    ("cta.partnership", "Partnership Inquiry"),
    ("cta.learn_more", "Learn More"),
    // Home
    ("home.headline", "Global Happiness Network for Children"),
    ("home.slogan", "Children's happiness starts with ART BONBON."),
    ("home.newsroom.title", "Newsroom"),
    ("home.newsroom.view_all", "View All News"),
    // Blog
    ("blog.title", "Blog"),
    ("blog.subtitle", "Art education insights"),
    ("blog.readmore", "Read More"),
    ("blog.back", "Back to Blog"),
    ("blog.prev", "Previous Post"),
    ("blog.next", "Next Post"),
    ("blog.notfound", "Post not found."),
    // Products
    ("products.title", "Products"),
    (
        "products.subtitle",
        "Art solutions creating a global happiness network for children",
    ),
    ("products.viewdetails", "View Details"),
    ("products.comingsoon", "Coming Soon"),
    ("products.artbonbon.name", "ART BONBON"),
    (
        "products.artbonbon.desc",
        "Digital drawing tool that maximizes children's creativity",
    ),
    ("products.school.name", "ART BONBON SCHOOL"),
    (
        "products.school.desc",
        "AI-powered art education solution for educational institutions",
    ),
    ("products.gallery.name", "Gallery"),
    ("products.gallery.desc", "Art platform for global communication"),
    // Newsroom
    ("newsroom.title", "Newsroom"),
    ("newsroom.subtitle", "Latest news and updates"),
    ("newsroom.press", "Press Releases"),
    ("newsroom.events", "Events"),
    ("newsroom.awards", "Awards"),
    ("newsroom.partnerships", "Partnerships"),
    // Contact
    ("contact.title", "Contact"),
    ("contact.subtitle", "We welcome all inquiries"),
    ("contact.happytalk.title", "Contact Us"),
    ("contact.happytalk.desc", "Contact us quickly through HappyTalk."),
    ("contact.happytalk.button", "Contact Us"),
    ("contact.form.title", "Send us a message"),
    ("contact.form.select", "Please select"),
    ("contact.form.submit", "Submit Inquiry"),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Subject"),
    ("contact.form.message", "Message"),
    // Footer
    ("footer.company", "Company"),
    ("footer.products", "Products"),
    ("footer.careers", "Careers"),
    ("footer.resources", "Resources"),
    ("footer.legal", "Legal"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.copyright", "© 2024 i-Scream arts. All rights reserved."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_both_languages() {
        assert_eq!(t(Lang::Ko, "nav.home"), "홈");
        assert_eq!(t(Lang::En, "nav.home"), "Home");
    }

    #[test]
    fn missing_key_comes_back_verbatim() {
        assert_eq!(t(Lang::Ko, "nav.missing"), "nav.missing");
        assert_eq!(t(Lang::En, "nav.missing"), "nav.missing");
    }

    #[test]
    fn catalogs_have_identical_key_sets() {
        let ko: std::collections::BTreeSet<_> = keys_for(Lang::Ko).collect();
        let en: std::collections::BTreeSet<_> = keys_for(Lang::En).collect();
        assert_eq!(ko, en);
    }

    #[test]
    fn tag_round_trip() {
        for &lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("KO"), None);
    }
}
