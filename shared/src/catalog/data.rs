//! Built-in plant table

use crate::models::PlantRecord;
use crate::types::Category::{self, *};
use crate::types::Season::{self, *};

#[allow(clippy::too_many_arguments)]
fn plant(
    id: u32,
    name: &str,
    category: Category,
    emoji: &str,
    base_value: u32,
    seed_cost: u32,
    growth_time: u32,
    seasons: &[Season],
    description: &str,
) -> PlantRecord {
    PlantRecord {
        id,
        name: name.to_string(),
        category,
        emoji: emoji.to_string(),
        base_value,
        seed_cost,
        growth_time,
        seasons: seasons.to_vec(),
        description: description.to_string(),
    }
}

pub(super) fn builtin_plants() -> Vec<PlantRecord> {
    vec![
        plant(1, "萝卜", Vegetables, "🥕", 50, 10, 4, &[Spring, Fall], "基础蔬菜，生长快速，适合新手"),
        plant(2, "土豆", Vegetables, "🥔", 80, 15, 6, &[Spring, Fall], "高产蔬菜，适合大量种植"),
        plant(3, "番茄", Vegetables, "🍅", 120, 25, 11, &[Spring, Summer], "高价值蔬菜，需要较长生长时间"),
        plant(4, "草莓", Fruits, "🍓", 200, 50, 8, &[Spring], "高价值水果，春季种植最佳"),
        plant(5, "蓝莓", Fruits, "🫐", 250, 80, 13, &[Summer], "稀有水果，夏季专属"),
        plant(6, "苹果", Fruits, "🍎", 180, 60, 28, &[Fall], "秋季水果，需要较长时间成熟"),
        plant(7, "向日葵", Flowers, "🌻", 150, 30, 12, &[Summer, Fall], "美丽的花卉，夏季秋季都可种植"),
        plant(8, "玫瑰", Flowers, "🌹", 300, 100, 7, &[Spring, Summer], "高价值花卉，适合送礼"),
        plant(9, "薰衣草", Herbs, "💜", 120, 40, 7, &[Spring, Summer], "香草植物，可用于制作精油"),
        plant(10, "薄荷", Herbs, "🌿", 80, 20, 4, &[Spring, Summer, Fall], "快速生长的香草，多季节可种"),
        plant(11, "玉米", Vegetables, "🌽", 100, 35, 14, &[Summer], "夏季主要作物，产量高"),
        plant(12, "南瓜", Vegetables, "🎃", 350, 120, 13, &[Fall], "秋季特色作物，价值很高"),
        plant(13, "葡萄", Fruits, "🍇", 280, 90, 10, &[Summer, Fall], "酿酒原料，市场需求大"),
        plant(14, "百合", Flowers, "🌸", 200, 70, 6, &[Spring], "春季花卉，象征纯洁"),
        plant(15, "迷迭香", Herbs, "🌱", 150, 50, 7, &[Spring, Summer], "烹饪香料，药用价值高"),
        plant(16, "胡萝卜", Vegetables, "🥕", 60, 12, 5, &[Spring, Fall], "营养丰富的根茎类蔬菜"),
        plant(17, "洋葱", Vegetables, "🧅", 70, 15, 7, &[Spring, Fall], "基础调味蔬菜，需求稳定"),
        plant(18, "大蒜", Vegetables, "🧄", 90, 20, 8, &[Spring, Fall], "调味佳品，药用价值高"),
        plant(19, "白菜", Vegetables, "🥬", 85, 18, 6, &[Spring, Fall], "常见叶菜，生长快速"),
        plant(20, "菠菜", Vegetables, "🥬", 75, 16, 5, &[Spring, Fall], "营养丰富的绿叶蔬菜"),
        plant(21, "生菜", Vegetables, "🥬", 65, 14, 4, &[Spring, Summer, Fall], "快速生长的叶菜类"),
        plant(22, "黄瓜", Vegetables, "🥒", 110, 25, 9, &[Spring, Summer], "夏季清爽蔬菜"),
        plant(23, "茄子", Vegetables, "🍆", 130, 30, 10, &[Summer], "夏季特色蔬菜"),
        plant(24, "辣椒", Vegetables, "🌶️", 95, 22, 8, &[Spring, Summer], "调味蔬菜，辣度可调"),
        plant(25, "甜椒", Vegetables, "🫑", 105, 24, 9, &[Spring, Summer], "彩色蔬菜，营养丰富"),
        plant(26, "西兰花", Vegetables, "🥦", 140, 32, 11, &[Spring, Fall], "营养丰富的十字花科蔬菜"),
        plant(27, "花椰菜", Vegetables, "🥦", 135, 31, 10, &[Spring, Fall], "白色花椰菜，口感细腻"),
        plant(28, "芹菜", Vegetables, "🥬", 70, 16, 6, &[Spring, Fall], "低热量蔬菜，适合减肥"),
        plant(29, "韭菜", Vegetables, "🥬", 55, 12, 4, &[Spring, Summer, Fall], "快速生长的调味蔬菜"),
        plant(30, "莴笋", Vegetables, "🥬", 80, 18, 7, &[Spring, Fall], "清脆爽口的叶菜"),
        plant(31, "橙子", Fruits, "🍊", 160, 55, 25, &[Winter], "冬季柑橘类水果"),
        plant(32, "柠檬", Fruits, "🍋", 140, 45, 22, &[Winter], "酸性水果，调味佳品"),
        plant(33, "香蕉", Fruits, "🍌", 120, 40, 18, &[Summer], "热带水果，营养丰富"),
        plant(34, "桃子", Fruits, "🍑", 220, 75, 20, &[Summer], "夏季甜美水果"),
        plant(35, "梨子", Fruits, "🍐", 170, 58, 24, &[Fall], "秋季水果，口感细腻"),
        plant(36, "樱桃", Fruits, "🍒", 300, 100, 15, &[Spring], "春季珍贵水果"),
        plant(37, "李子", Fruits, "🫐", 190, 65, 19, &[Summer], "夏季酸甜水果"),
        plant(38, "杏子", Fruits, "🍑", 180, 62, 17, &[Spring], "春季早熟水果"),
        plant(39, "石榴", Fruits, "🍎", 260, 85, 26, &[Fall], "秋季特色水果"),
        plant(40, "无花果", Fruits, "🍎", 240, 80, 23, &[Summer, Fall], "古老水果，营养丰富"),
        plant(41, "郁金香", Flowers, "🌷", 180, 60, 8, &[Spring], "春季经典花卉"),
        plant(42, "康乃馨", Flowers, "🌺", 220, 75, 9, &[Spring, Summer], "母亲节首选花卉"),
        plant(43, "菊花", Flowers, "🌼", 160, 55, 10, &[Fall], "秋季传统花卉"),
        plant(44, "牡丹", Flowers, "🌸", 400, 150, 14, &[Spring], "花中之王，价值极高"),
        plant(45, "兰花", Flowers, "🌺", 500, 200, 16, &[Spring, Summer], "高雅花卉，稀有珍贵"),
        plant(46, "茉莉花", Flowers, "🌼", 280, 95, 11, &[Spring, Summer], "香型花卉，可制茶"),
        plant(47, "栀子花", Flowers, "🌼", 320, 110, 12, &[Spring, Summer], "白色香花，观赏价值高"),
        plant(48, "月季", Flowers, "🌹", 250, 85, 8, &[Spring, Summer, Fall], "四季常开的花卉"),
        plant(49, "紫罗兰", Flowers, "💜", 200, 70, 7, &[Spring], "紫色浪漫花卉"),
        plant(50, "风信子", Flowers, "🌷", 190, 65, 9, &[Spring], "球根花卉，香气浓郁"),
        plant(51, "百里香", Herbs, "🌿", 130, 45, 6, &[Spring, Summer], "烹饪香料，抗菌作用"),
        plant(52, "罗勒", Herbs, "🌿", 110, 35, 5, &[Spring, Summer], "意大利菜常用香料"),
        plant(53, "牛至", Herbs, "🌿", 140, 48, 7, &[Spring, Summer], "地中海香料，药用价值高"),
        plant(54, "鼠尾草", Herbs, "🌿", 160, 55, 8, &[Spring, Summer], "传统药用植物"),
        plant(55, "马郁兰", Herbs, "🌿", 120, 42, 6, &[Spring, Summer], "温和香料，适合烹饪"),
        plant(56, "香茅", Herbs, "🌿", 180, 65, 9, &[Spring, Summer], "热带香料，柠檬香气"),
        plant(57, "柠檬草", Herbs, "🌿", 170, 60, 8, &[Spring, Summer], "柠檬味香料，可制茶"),
        plant(58, "茴香", Herbs, "🌿", 150, 52, 7, &[Spring, Summer], "传统香料，助消化"),
        plant(59, "香菜", Herbs, "🌿", 90, 25, 4, &[Spring, Summer, Fall], "快速生长的调味香料"),
        plant(60, "欧芹", Herbs, "🌿", 100, 30, 5, &[Spring, Summer, Fall], "西式烹饪常用香料"),
        plant(61, "甜菜根", Vegetables, "🥕", 95, 22, 8, &[Spring, Fall], "红色根茎蔬菜，营养丰富"),
        plant(62, "芜菁", Vegetables, "🥕", 70, 16, 6, &[Spring, Fall], "传统根茎蔬菜"),
        plant(63, "萝卜", Vegetables, "🥕", 65, 15, 5, &[Spring, Fall], "白色萝卜，清脆爽口"),
        plant(64, "红薯", Vegetables, "🍠", 120, 28, 12, &[Spring, Summer], "营养丰富的根茎类"),
        plant(65, "山药", Vegetables, "🍠", 140, 35, 15, &[Spring, Summer], "传统滋补食材"),
        plant(66, "芋头", Vegetables, "🍠", 110, 26, 11, &[Spring, Summer], "淀粉类根茎蔬菜"),
        plant(67, "莲藕", Vegetables, "🥕", 160, 40, 18, &[Summer, Fall], "水生蔬菜，营养丰富"),
        plant(68, "荸荠", Vegetables, "🥕", 130, 32, 14, &[Summer, Fall], "水生蔬菜，清脆可口"),
        plant(69, "竹笋", Vegetables, "🎋", 200, 50, 20, &[Spring], "春季山珍，价值很高"),
        plant(70, "芦笋", Vegetables, "🥬", 180, 45, 16, &[Spring], "春季高档蔬菜"),
        plant(71, "柿子", Fruits, "🍅", 220, 75, 25, &[Fall], "秋季特色水果"),
        plant(72, "柚子", Fruits, "🍊", 180, 60, 22, &[Winter], "冬季柑橘类水果"),
        plant(73, "金桔", Fruits, "🍊", 160, 55, 20, &[Winter], "小型柑橘，适合盆栽"),
        plant(74, "枇杷", Fruits, "🍊", 240, 80, 24, &[Spring], "春季早熟水果"),
        plant(75, "杨梅", Fruits, "🍓", 280, 95, 18, &[Summer], "夏季珍贵水果"),
        plant(76, "桑葚", Fruits, "🫐", 200, 70, 16, &[Summer], "夏季浆果，营养丰富"),
        plant(77, "山楂", Fruits, "🍎", 150, 50, 21, &[Fall], "秋季酸味水果"),
        plant(78, "枣子", Fruits, "🍎", 190, 65, 23, &[Fall], "秋季滋补水果"),
        plant(79, "栗子", Fruits, "🌰", 170, 58, 26, &[Fall], "秋季坚果类水果"),
        plant(80, "核桃", Fruits, "🌰", 300, 100, 30, &[Fall], "秋季坚果，营养价值高"),
        plant(81, "杏仁", Fruits, "🌰", 320, 110, 28, &[Fall], "秋季坚果，健康食品"),
        plant(82, "开心果", Fruits, "🌰", 400, 150, 32, &[Fall], "秋季高档坚果"),
        plant(83, "松子", Fruits, "🌰", 350, 120, 35, &[Fall], "秋季珍贵坚果"),
        plant(84, "榛子", Fruits, "🌰", 280, 95, 29, &[Fall], "秋季传统坚果"),
        plant(85, "夏威夷果", Fruits, "🌰", 450, 180, 40, &[Fall], "秋季顶级坚果"),
        plant(86, "腰果", Fruits, "🌰", 380, 140, 36, &[Fall], "秋季进口坚果"),
        plant(87, "巴西坚果", Fruits, "🌰", 420, 160, 38, &[Fall], "秋季稀有坚果"),
        plant(88, "山核桃", Fruits, "🌰", 360, 130, 34, &[Fall], "秋季本土坚果"),
        plant(89, "碧根果", Fruits, "🌰", 390, 145, 37, &[Fall], "秋季优质坚果"),
        plant(90, "银杏", Fruits, "🌰", 500, 200, 50, &[Fall], "秋季珍贵果实，药用价值极高"),
        plant(91, "人参", Herbs, "🌿", 800, 300, 60, &[Spring], "珍贵药材，价值连城"),
        plant(92, "灵芝", Herbs, "🍄", 600, 250, 45, &[Spring, Summer], "珍贵菌类，药用价值高"),
        plant(93, "冬虫夏草", Herbs, "🍄", 1000, 500, 90, &[Winter], "顶级药材，价值极高"),
        plant(94, "藏红花", Herbs, "🌺", 700, 280, 55, &[Spring], "珍贵香料，药用价值高"),
        plant(95, "天麻", Herbs, "🌿", 650, 260, 50, &[Spring], "名贵药材，功效显著"),
        plant(96, "何首乌", Herbs, "🌿", 550, 220, 42, &[Spring, Summer], "传统药材，滋补养生"),
        plant(97, "当归", Herbs, "🌿", 480, 190, 38, &[Spring], "妇科良药，补血养气"),
        plant(98, "黄芪", Herbs, "🌿", 520, 210, 40, &[Spring], "补气良药，增强免疫"),
        plant(99, "枸杞", Herbs, "🌿", 450, 180, 35, &[Spring, Summer], "滋补佳品，明目养肝"),
        plant(100, "金银花", Herbs, "🌼", 380, 150, 30, &[Spring, Summer], "清热解毒，药用价值高"),
    ]
}
