use super::model::Industry;

/// Keyword substrings per industry, in classification order.
///
/// Keywords are stored lowercase. A company is labelled with the *last*
/// industry in this table whose keywords occur in its name.
pub const INDUSTRY_KEYWORDS: [(Industry, &[&str]); 10] = [
    (
        Industry::Finance,
        &[
            "银行", "保险", "证券", "金融", "基金", "投资", "信托", "bank", "insurance",
            "securities", "financ", "fund", "investment", "trust",
        ],
    ),
    (
        Industry::RealEstate,
        &[
            "地产", "置业", "房产", "物业", "房地产", "real estate", "realty", "property",
            "properties",
        ],
    ),
    (
        Industry::Manufacturing,
        &[
            "制造", "工业", "科技", "电子", "机械", "设备", "汽车", "manufactur", "industrial",
            "electronic", "machinery", "equipment", "automotive", "motor",
        ],
    ),
    (
        Industry::Transportation,
        &[
            "航空", "铁路", "物流", "港口", "运输", "交通", "航运", "airline", "railway",
            "logistics", "shipping", "transport",
        ],
    ),
    (
        Industry::Energy,
        &[
            "电力", "石油", "煤炭", "能源", "燃气", "新能源", "power", "petroleum", "coal",
            "energy", "natural gas",
        ],
    ),
    (
        Industry::InformationTechnology,
        &[
            "信息", "技术", "软件", "互联网", "计算机", "通信", "information", "software",
            "internet", "computer", "telecom", "communication",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "医疗", "医药", "健康", "生物", "制药", "medical", "pharma", "health", "bio",
        ],
    ),
    (
        Industry::Consumer,
        &[
            "零售", "食品", "饮料", "消费", "家电", "服装", "retail", "food", "beverage",
            "consumer", "appliance", "apparel",
        ],
    ),
    (
        Industry::Education,
        &["教育", "培训", "学校", "education", "training", "school"],
    ),
    (
        Industry::Media,
        &[
            "传媒", "广告", "娱乐", "影视", "出版", "media", "advertising", "entertainment",
            "film", "publishing",
        ],
    ),
];

/// Classify a company by name. Case-insensitive plain substring match; the
/// last matching industry in [`INDUSTRY_KEYWORDS`] wins.
pub fn classify(company_name: &str) -> Industry {
    let name = company_name.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| name.contains(kw)))
        .map(|(industry, _)| *industry)
        .last()
        .unwrap_or(Industry::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_without_keywords_is_other() {
        assert_eq!(classify("Plain Holdings Ltd"), Industry::Other);
        assert_eq!(classify(""), Industry::Other);
    }

    #[test]
    fn chinese_keywords_match() {
        assert_eq!(classify("浦发银行"), Industry::Finance);
        assert_eq!(classify("万科房产"), Industry::RealEstate);
        assert_eq!(classify("中国石油"), Industry::Energy);
        assert_eq!(classify("华策影视"), Industry::Media);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(classify("GLOBAL SOFTWARE INC"), Industry::InformationTechnology);
        assert_eq!(classify("First Bank"), Industry::Finance);
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        assert_eq!(classify("Megabankcorp"), Industry::Finance);
    }

    #[test]
    fn last_matching_industry_wins() {
        // Finance precedes Information-Technology in the table.
        assert_eq!(classify("Bank Software Group"), Industry::InformationTechnology);
        assert_eq!(classify("Software Bank Group"), Industry::InformationTechnology);
        // 科技 (Manufacturing) then 信息 (Information-Technology).
        assert_eq!(classify("东方信息科技"), Industry::InformationTechnology);
        // 医药 (Healthcare) then 零售 (Consumer).
        assert_eq!(classify("医药零售连锁"), Industry::Consumer);
    }

    #[test]
    fn classification_is_idempotent() {
        let name = "Harbour Logistics Media";
        assert_eq!(classify(name), classify(name));
        assert_eq!(classify(name), Industry::Media);
    }

    #[test]
    fn keywords_are_stored_lowercase() {
        for (industry, keywords) in INDUSTRY_KEYWORDS {
            for kw in keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{industry}: {kw}");
            }
        }
    }

    #[test]
    fn table_lists_each_named_industry_once() {
        let listed: Vec<Industry> = INDUSTRY_KEYWORDS.iter().map(|(i, _)| *i).collect();
        assert_eq!(listed, Industry::ALL[..10].to_vec());
    }
}
