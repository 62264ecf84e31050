//! Static fallback dataset, substituted when the live feed is unreachable.

use crate::domain::RawHeadline;

const LTN: (&str, &str) = ("ltn", "自由財經");
const YAHOO: (&str, &str) = ("yahoo", "Yahoo 財經");
const ETTODAY: (&str, &str) = ("ettoday", "ETtoday 財經");

const FALLBACK: &[((&str, &str), &str, &str)] = &[
    (LTN, "Costco神物清單曝光！7款買來「能用到天荒地老」會員激推", "2025-11-25 11:15:28"),
    (LTN, "焦點股》精成科：打入Google TPU供應鏈 市場按讚", "2025-11-25 11:15:28"),
    (LTN, "16歲拿700元創副業！現營收近4100萬 他親曝翻身心路", "2025-11-25 11:15:28"),
    (LTN, "市值達4兆美元、蘋果卻「罕見」裁員 ! 分析師揭背後盤算", "2025-11-25 11:15:28"),
    (LTN, "焦點股》台積電：先進製程 客戶需求強勁", "2025-11-25 11:15:28"),
    (LTN, "川普啟動「創世紀任務」 攜手輝達、超微等巨頭加速聯邦AI研究", "2025-11-25 11:15:28"),
    (LTN, "焦點股》信驊：外資上修目標價 噴出再創高", "2025-11-25 11:15:28"),
    (YAHOO, "不到一個月拉5次漲停！「這被動元件」股價4天飆35%登強勢股王", "2025-11-25 11:15:30"),
    (YAHOO, "瞄準記憶體巨頭砸錢！小兒捧逾31億強勢掃貨南亞科", "2025-11-25 11:15:30"),
    (ETTODAY, "台積電漲50元至1425　台股勁揚613點站上2萬7", "2025-11-25 11:15:31"),
];

/// The ten bundled headlines. Links are the placeholder, as in the snapshot
/// they were captured from.
pub fn fallback_headlines() -> Vec<RawHeadline> {
    FALLBACK
        .iter()
        .map(|&((source, name), title, timestamp)| {
            RawHeadline::new(source, title)
                .with_display_name(name)
                .with_link("#")
                .with_timestamp(timestamp)
        })
        .collect()
}
