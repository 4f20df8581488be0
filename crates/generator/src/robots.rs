//! The `robots.txt` document served at the site root.
//!
//! Every listed crawler is refused, followed by a catch-all block, and the
//! sitemap index is advertised on the last line.

use folio_core::{Error, Result};
use url::Url;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Path of the sitemap index, relative to the site base URL
pub const SITEMAP_INDEX: &str = "sitemap-index.xml";

/// Crawler directives, grouped by the organization operating each bot.
///
/// Duplicate agents are listed under every group they belong to.
const DIRECTIVES: &str = r#"
User-agent: AI2Bot
User-agent: Ai2Bot-Dolma
User-agent: Amazonbot
User-agent: Applebot
User-agent: Applebot-Extended
User-agent: Bytespider
User-agent: CCBot
User-agent: ChatGPT-User
User-agent: Claude-Web
User-agent: ClaudeBot
User-agent: Diffbot
User-agent: FacebookBot
User-agent: FriendlyCrawler
User-agent: GPTBot
User-agent: Google-Extended
User-agent: GoogleOther
User-agent: GoogleOther-Image
User-agent: GoogleOther-Video
User-agent: ICC-Crawler
User-agent: ISSCyberRiskCrawler
User-agent: ImagesiftBot
User-agent: Kangaroo Bot
User-agent: Meta-ExternalAgent
User-agent: Meta-ExternalFetcher
User-agent: OAI-SearchBot
User-agent: PerplexityBot
User-agent: PetalBot
User-agent: Scrapy
User-agent: Sidetrade indexer bot
User-agent: Timpibot
User-agent: VelenPublicWebCrawler
User-agent: Webzio-Extended
User-agent: YouBot
User-agent: anthropic-ai
User-agent: cohere-ai
User-agent: facebookexternalhit
User-agent: iaskspider/2.0
User-agent: img2dataset
User-agent: omgili
User-agent: omgilibot
User-agent: 360Spider
User-agent: 360Spider-Image
User-agent: 360Spider-Video
# google.com landing page quality checks
User-agent: AdsBot-Google
User-agent: AdsBot-Google-Mobile
# google.com app resource fetcher
User-agent: AdsBot-Google-Mobile-Apps
# bing ads bot
User-agent: adidxbot
# apple.com search engine
User-agent: Applebot
user-agent: AppleNewsBot
# baidu.com chinese search engine
User-agent: Baiduspider
User-agent: Baiduspider-image
User-agent: Baiduspider-news
User-agent: Baiduspider-video
# bing.com international search engine
User-agent: bingbot
User-agent: BingPreview
# bublup.com suggestion/search engine
User-agent: BublupBot
# commoncrawl.org open repository of web crawl data
User-agent: CCBot
# cliqz.com german in-product search engine
User-agent: Cliqzbot
# coccoc.com vietnamese search engine
User-agent: coccoc
User-agent: coccocbot-image
User-agent: coccocbot-web
# daum.net korean search engine
User-agent: Daumoa
# dazoo.fr french search engine
User-agent: Dazoobot
# deusu.de german search engine
User-agent: DeuSu
# duckduckgo.com international privacy search engine
User-agent: DuckDuckBot
User-agent: DuckDuckGo-Favicons-Bot
# eurip.com european search engine
User-agent: EuripBot
# exploratodo.com latin search engine
User-agent: Exploratodo
# facebook.com social network
User-agent: facebookcatalog
User-agent: facebookexternalhit
User-agent: Facebot
# feedly.com feed fetcher
User-agent: Feedly
# findx.com european search engine
User-agent: Findxbot
# goo.ne.jp japanese search engine
User-agent: gooblog
# google.com international search engine
User-agent: Googlebot
User-agent: Googlebot-Image
User-agent: Googlebot-Mobile
User-agent: Googlebot-News
User-agent: Googlebot-Video
# so.com chinese search engine
User-agent: HaoSouSpider
# goo.ne.jp japanese search engine
User-agent: ichiro
# istella.it italian search engine
User-agent: istellabot
# jike.com / chinaso.com chinese search engine
User-agent: JikeSpider
# lycos.com & hotbot.com international search engine
User-agent: Lycos
# mail.ru russian search engine
User-agent: Mail.Ru
# google.com adsense bot
User-agent: Mediapartners-Google
# Preview bot for Microsoft products
User-agent: MicrosoftPreview
# mojeek.com search engine
User-agent: MojeekBot
# bing.com international search engine
User-agent: msnbot
User-agent: msnbot-media
# orange.com international search engine
User-agent: OrangeBot
# pinterest.com social networtk
User-agent: Pinterest
# botje.nl dutch search engine
User-agent: Plukkie
# qwant.com french search engine
User-agent: Qwantify
# rambler.ru russian search engine
User-agent: Rambler
# seznam.cz czech search engine
User-agent: SeznamBot
# soso.com chinese search engine
User-agent: Sosospider
# yahoo.com international search engine
User-agent: Slurp
# sogou.com chinese search engine
User-agent: Sogou blog
User-agent: Sogou inst spider
User-agent: Sogou News Spider
User-agent: Sogou Orion spider
User-agent: Sogou spider2
User-agent: Sogou web spider
# sputnik.ru russian search engine
User-agent: SputnikBot
# twitter.com social media bot
User-agent: Twitterbot
# whatsapp.com preview bot
User-agent: WhatsApp
# yacy.net p2p search software
User-agent: yacybot
# yandex.com russian search engine
User-agent: Yandex
User-agent: YandexMobileBot
# yep.com search engine
User-agent: YepBot
# search.naver.com south korean search engine
User-agent: Yeti
# yioop.com international search engine
User-agent: YioopBot
# yooz.ir iranian search engine
User-agent: yoozBot
# youdao.com chinese search engine
User-agent: YoudaoBot
# crawling rule(s) for above bots
Disallow: /
# disallow all other bots
User-agent: *
Disallow: /
"#;

/// Resolve the sitemap index against the site base URL.
///
/// Standard relative resolution applies: a base without a trailing slash
/// has its last path segment replaced.
pub fn sitemap_url(base: &Url) -> Result<Url> {
    base.join(SITEMAP_INDEX)
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}

/// Build the complete robots.txt body for a site.
pub fn robots_txt(base: &Url) -> Result<String> {
    let sitemap = sitemap_url(base)?;
    let body = format!("{}\n\nSitemap: {}", DIRECTIVES.trim(), sitemap);
    Ok(body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_sitemap_line_is_last() {
        let body = robots_txt(&base("https://example.dev/")).unwrap();
        assert_eq!(
            body.lines().last(),
            Some("Sitemap: https://example.dev/sitemap-index.xml")
        );
        assert_eq!(body.matches("Sitemap:").count(), 1);
    }

    #[test]
    fn test_starts_with_first_agent() {
        let body = robots_txt(&base("https://example.dev/")).unwrap();
        assert!(body.starts_with("User-agent: AI2Bot\n"));
        assert_eq!(body, body.trim());
    }

    #[test]
    fn test_single_wildcard_block() {
        let body = robots_txt(&base("https://example.dev/")).unwrap();
        let lines: Vec<&str> = body.lines().collect();

        let wildcard: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == "User-agent: *")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(wildcard.len(), 1);
        assert_eq!(lines[wildcard[0] + 1], "Disallow: /");
    }

    #[test]
    fn test_named_agents_share_one_disallow() {
        let body = robots_txt(&base("https://example.dev/")).unwrap();
        // one for the named group, one for the catch-all
        assert_eq!(body.matches("Disallow: /").count(), 2);
        assert!(body.contains("# crawling rule(s) for above bots\nDisallow: /"));
        assert!(body.contains("user-agent: AppleNewsBot"));
        assert!(body.contains("User-agent: Sidetrade indexer bot"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let url = base("https://erengun.dev/");
        let first = robots_txt(&url).unwrap();
        let second = robots_txt(&url).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_sitemap_url_resolution() {
        assert_eq!(
            sitemap_url(&base("https://example.dev")).unwrap().as_str(),
            "https://example.dev/sitemap-index.xml"
        );
        assert_eq!(
            sitemap_url(&base("https://example.dev/portfolio/")).unwrap().as_str(),
            "https://example.dev/portfolio/sitemap-index.xml"
        );
        // no trailing slash: the last segment is replaced
        assert_eq!(
            sitemap_url(&base("https://example.dev/portfolio")).unwrap().as_str(),
            "https://example.dev/sitemap-index.xml"
        );
    }
}
