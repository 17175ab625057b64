/// Country / currency metadata record. Values are passed through from the
/// backend unmodified; the wire names are already snake_case.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub currency_name: String,
    pub currency_symbol: String,
    pub national_flag: String,
    pub withdrawal_method: i32,
    pub money_detail: i32,
    pub image: String,
    pub area_number: String,
    pub code: String,
    pub rebate_money: String,
    pub rebate_money_register: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_country_passthrough() {
        let value = serde_json::json!({
            "id": 1,
            "name": "Nigeria",
            "short_name": "NG",
            "currency_name": "Naira",
            "currency_symbol": "₦",
            "national_flag": "🇳🇬",
            "withdrawal_method": 1,
            "money_detail": 2,
            "image": "https://cdn.gcard8.com/flags/ng.png",
            "area_number": "+234",
            "code": "NGN",
            "rebate_money": "0.00",
            "rebate_money_register": "1.50"
        });

        let country: Country = giftcard_utils::serde_func::serde_from_value(value).unwrap();
        assert_eq!(country.id, 1);
        assert_eq!(country.short_name, "NG");
        assert_eq!(country.area_number, "+234");
        assert_eq!(country.rebate_money_register, "1.50");
    }
}
